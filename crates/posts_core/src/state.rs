use crate::view_model::{AppViewModel, ObservedItem, PostRowView};
use crate::{
    filter_posts, Effect, LoaderDeps, PageIndex, PageRequest, PaginationConfig, Post, PostId,
    QueryState, VisibilityLoader, WatcherId,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryState,
    filter_text: String,
    loader: VisibilityLoader,
    dirty: bool,
}

impl AppState {
    pub fn new(config: PaginationConfig) -> Self {
        let mut state = Self {
            query: QueryState::new(config),
            filter_text: String::new(),
            loader: VisibilityLoader::new(),
            dirty: false,
        };
        state.bind_last_item();
        state.dirty = false;
        state
    }

    /// Builds the state and requests the first page.
    pub fn init(config: PaginationConfig) -> (Self, Vec<Effect>) {
        let mut state = Self::new(config);
        let effects = state
            .request_next_page()
            .map(Effect::FetchPage)
            .into_iter()
            .collect();
        state.bind_last_item();
        state.mark_dirty();
        (state, effects)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn loader(&self) -> &VisibilityLoader {
        &self.loader
    }

    /// Posts after filtering, in fetch order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_posts(self.query.pages(), &self.filter_text)
    }

    /// The post that should carry the visibility watcher.
    pub fn last_visible_post(&self) -> Option<PostId> {
        self.visible_posts().last().map(|post| post.id)
    }

    pub fn view(&self) -> AppViewModel {
        let visible = self.visible_posts();
        let last_index = visible.len().checked_sub(1);
        let posts = visible
            .iter()
            .enumerate()
            .map(|(index, post)| PostRowView {
                id: post.id,
                title: post.title.clone(),
                body: post.body.clone(),
                is_last: Some(index) == last_index,
            })
            .collect();

        AppViewModel {
            filter_text: self.filter_text.clone(),
            posts,
            observed: self.loader.watcher().map(|watcher| ObservedItem {
                watcher: watcher.id(),
                post_id: watcher.target(),
            }),
            status: self.query.status(),
            error: self.query.error().map(ToOwned::to_owned),
            is_loading: self.query.is_fetching(),
            is_fetching_next_page: self.query.is_fetching_next_page(),
            has_next_page: self.query.has_next_page(),
            pages_loaded: self.query.pages().len(),
            fetched_count: self.query.fetched_count(),
            total_items: self.query.config().total_items,
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_filter_text(&mut self, text: String) {
        if self.filter_text != text {
            self.filter_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn request_next_page(&mut self) -> Option<PageRequest> {
        let request = self.query.request_next_page();
        if request.is_some() {
            self.mark_dirty();
        }
        request
    }

    pub(crate) fn retry(&mut self) -> Option<PageRequest> {
        let request = self.query.retry();
        if request.is_some() {
            self.mark_dirty();
        }
        request
    }

    pub(crate) fn append_page(
        &mut self,
        page: PageIndex,
        posts: Vec<Post>,
        total_count: Option<u64>,
    ) {
        if self.query.append_page(page, posts, total_count) {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_error(&mut self, page: PageIndex, message: String) {
        if self.query.set_error(page, message) {
            self.mark_dirty();
        }
    }

    pub(crate) fn on_intersection(&mut self, watcher: WatcherId, is_intersecting: bool) -> bool {
        self.loader.on_intersection(watcher, is_intersecting)
    }

    /// Offers the current last item to the loader, as a render would.
    pub(crate) fn bind_last_item(&mut self) {
        let last_item = self.last_visible_post();
        let deps = LoaderDeps {
            has_next_page: self.query.has_next_page(),
            is_fetching: self.query.is_fetching(),
        };
        if self.loader.bind(last_item, deps) {
            self.mark_dirty();
        }
    }
}
