use crate::{PostId, QueryStatus, WatcherId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub filter_text: String,
    /// Fetched posts after filtering, in fetch order.
    pub posts: Vec<PostRowView>,
    pub observed: Option<ObservedItem>,
    pub status: QueryStatus,
    pub error: Option<String>,
    /// Any fetch, initial or next-page, is outstanding.
    pub is_loading: bool,
    pub is_fetching_next_page: bool,
    pub has_next_page: bool,
    pub pages_loaded: usize,
    pub fetched_count: usize,
    pub total_items: Option<u64>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRowView {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Last row of the filtered list; the one the watcher is placed on.
    pub is_last: bool,
}

/// The post currently observed for visibility, and by which watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedItem {
    pub watcher: WatcherId,
    pub post_id: PostId,
}
