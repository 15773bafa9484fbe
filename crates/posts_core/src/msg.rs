use crate::{PageIndex, Post, WatcherId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the filter input (every keystroke, no debounce).
    FilterChanged(String),
    /// User asked for the next page explicitly.
    LoadMoreClicked,
    /// User asked to retry after a failed fetch.
    RetryClicked,
    /// User asked to jump back to the top of the list.
    BackToTopClicked,
    /// Visibility report for the watcher on the last rendered post.
    Intersection {
        watcher: WatcherId,
        is_intersecting: bool,
    },
    /// Engine delivered a page.
    PageLoaded {
        page: PageIndex,
        posts: Vec<Post>,
        total_count: Option<u64>,
    },
    /// Engine failed to deliver a page.
    PageFailed { page: PageIndex, message: String },
    /// Idle interval of the event loop.
    Tick,
}
