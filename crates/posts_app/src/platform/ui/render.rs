use std::ops::Range;

use posts_core::{AppViewModel, PostId};

use super::constants::*;
use super::layout::Layout;
use super::viewport::ListViewport;

/// Lines of the scrollable list plus the rows each post occupies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListContent {
    pub lines: Vec<String>,
    pub item_rows: Vec<(PostId, Range<usize>)>,
}

impl ListContent {
    pub fn rows_of(&self, post_id: PostId) -> Option<&Range<usize>> {
        self.item_rows
            .iter()
            .find(|(id, _)| *id == post_id)
            .map(|(_, rows)| rows)
    }
}

/// A full frame: one string per terminal row and the input cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<String>,
    pub cursor: (u16, u16),
}

/// Lays out the filtered posts, or the error in their place.
pub fn build_list(view: &AppViewModel, width: usize) -> ListContent {
    let mut content = ListContent::default();

    if let Some(message) = view.error.as_deref() {
        content.lines.push(fit(&format!("Error: {message}"), width));
        content.lines.push(String::new());
        content.lines.push(fit(RETRY_LABEL, width));
        return content;
    }

    for post in &view.posts {
        let start = content.lines.len();
        content
            .lines
            .push(fit(&format!("#{} {}", post.id, post.title), width));
        for body_line in post.body.lines() {
            content
                .lines
                .push(fit(&format!("{BODY_INDENT}{body_line}"), width));
        }
        content.item_rows.push((post.id, start..content.lines.len()));
        content.lines.push(String::new());
    }

    if view.posts.is_empty() && !view.is_loading {
        content.lines.push(fit(EMPTY_TEXT, width));
    }
    content
}

pub fn render(
    view: &AppViewModel,
    layout: &Layout,
    content: &ListContent,
    viewport: &ListViewport,
) -> Screen {
    let width = usize::from(layout.width);
    let mut lines = vec![String::new(); usize::from(layout.height)];
    let mut put = |row: u16, text: String| {
        if let Some(slot) = lines.get_mut(usize::from(row)) {
            *slot = fit(&text, width);
        }
    };

    put(layout.title_row, TITLE.to_string());
    let filter_text = if view.filter_text.is_empty() {
        format!("{FILTER_LABEL}({FILTER_PLACEHOLDER})")
    } else {
        format!("{FILTER_LABEL}{}", view.filter_text)
    };
    put(layout.filter_row, filter_text);
    put(layout.separator_row, "-".repeat(width));

    for (i, line) in content
        .lines
        .iter()
        .skip(viewport.offset())
        .take(usize::from(layout.list_height))
        .enumerate()
    {
        put(layout.list_top + i as u16, line.clone());
    }

    put(layout.actions_row, actions_line(view));
    put(layout.status_row, status_line(view));

    let cursor_col = FILTER_LABEL.chars().count() + view.filter_text.chars().count();
    let max_col = layout.width.saturating_sub(1);
    Screen {
        lines,
        cursor: (
            u16::try_from(cursor_col).unwrap_or(max_col).min(max_col),
            layout.filter_row,
        ),
    }
}

fn actions_line(view: &AppViewModel) -> String {
    let mut parts = Vec::with_capacity(4);
    if view.is_loading {
        parts.push(LOADING_TEXT);
    }
    if view.has_next_page && view.error.is_none() {
        parts.push(LOAD_NEXT_LABEL);
    }
    parts.push(BACK_TO_TOP_LABEL);
    parts.push(QUIT_LABEL);
    parts.join("  ")
}

fn status_line(view: &AppViewModel) -> String {
    let total = view
        .total_items
        .map(|total| format!(" of {total}"))
        .unwrap_or_default();
    format!(
        "Pages: {} | Showing {} of {} fetched{} | {}",
        view.pages_loaded,
        view.posts.len(),
        view.fetched_count,
        total,
        if view.has_next_page {
            "more available"
        } else {
            "end of list"
        }
    )
}

fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
