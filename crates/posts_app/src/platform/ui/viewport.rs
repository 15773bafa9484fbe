//! List scrolling and the intersection observation of the watched post.

use std::ops::Range;

use posts_core::{Msg, ObservedItem, PostId, WatcherId};
use posts_logging::posts_debug;

use super::render::ListContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListViewport {
    offset: usize,
    height: usize,
    content_len: usize,
}

impl ListViewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height,
            content_len: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.clamp();
    }

    /// Content may shrink (filtering); the offset follows it.
    pub fn set_content_len(&mut self, len: usize) {
        self.content_len = len;
        self.clamp();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.clamp();
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_step());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn visible_rows(&self) -> Range<usize> {
        self.offset..self.offset + self.height
    }

    /// Any overlap between `rows` and the visible window counts.
    pub fn intersects(&self, rows: &Range<usize>) -> bool {
        let visible = self.visible_rows();
        !rows.is_empty() && !visible.is_empty() && rows.start < visible.end && visible.start < rows.end
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.height.max(1)).unwrap_or(isize::MAX)
    }

    fn max_offset(&self) -> usize {
        self.content_len.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

/// One observation of one watcher. Dropping it releases the watcher.
#[derive(Debug)]
struct Observation {
    watcher: WatcherId,
    post_id: PostId,
    reported: Option<bool>,
}

impl Observation {
    fn new(item: ObservedItem) -> Self {
        posts_debug!("observing post {} with watcher {}", item.post_id, item.watcher);
        Self {
            watcher: item.watcher,
            post_id: item.post_id,
            reported: None,
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        posts_debug!("released watcher {} on post {}", self.watcher, self.post_id);
    }
}

/// Reports visibility changes of the watched post after every draw.
///
/// A fresh watcher always gets one initial report; afterwards only changes
/// are reported.
#[derive(Debug, Default)]
pub struct IntersectionTracker {
    observation: Option<Observation>,
}

impl IntersectionTracker {
    pub fn observe(
        &mut self,
        observed: Option<ObservedItem>,
        content: &ListContent,
        viewport: &ListViewport,
    ) -> Option<Msg> {
        let Some(item) = observed else {
            self.observation = None;
            return None;
        };
        let replace = self
            .observation
            .as_ref()
            .map_or(true, |current| current.watcher != item.watcher);
        if replace {
            self.observation = Some(Observation::new(item));
        }

        let observation = self.observation.as_mut()?;
        let visible = content
            .rows_of(observation.post_id)
            .is_some_and(|rows| viewport.intersects(rows));
        if observation.reported == Some(visible) {
            return None;
        }
        observation.reported = Some(visible);
        Some(Msg::Intersection {
            watcher: observation.watcher,
            is_intersecting: visible,
        })
    }

    pub fn release(&mut self) {
        self.observation = None;
    }

    #[cfg(test)]
    pub fn watched(&self) -> Option<WatcherId> {
        self.observation.as_ref().map(|o| o.watcher)
    }
}
