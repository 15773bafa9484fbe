use crate::{Page, PageIndex, Post};

/// Page size and the optional known total that bound pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub page_size: u32,
    /// Total number of items on the remote source, if known up front.
    /// A server-supplied total replaces it once the first page arrives.
    pub total_items: Option<u64>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            total_items: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageIndex,
    pub page_size: u32,
}

/// Accumulated pages plus the flags derived from them.
///
/// All mutation goes through `request_next_page`, `append_page`,
/// `set_error` and `retry`. `pages[i]` always holds page index `i + 1` and
/// at most one page is in flight at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    config: PaginationConfig,
    pages: Vec<Page>,
    status: QueryStatus,
    in_flight: Option<PageIndex>,
    has_next_page: bool,
    last_page_short: bool,
    error: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl QueryState {
    pub fn new(config: PaginationConfig) -> Self {
        let config = PaginationConfig {
            page_size: config.page_size.max(1),
            ..config
        };
        let mut state = Self {
            config,
            pages: Vec::new(),
            status: QueryStatus::Idle,
            in_flight: None,
            has_next_page: true,
            last_page_short: false,
            error: None,
        };
        state.recompute_has_next_page();
        state
    }

    /// Starts fetching the page after the last stored one.
    ///
    /// Returns `None` and leaves the state untouched while a fetch is in
    /// flight, when no further page exists, or while an error is shown.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some()
            || !self.has_next_page
            || self.status == QueryStatus::Error
        {
            return None;
        }

        let page = self.next_page_index();
        self.in_flight = Some(page);
        if self.pages.is_empty() {
            self.status = QueryStatus::Loading;
        }
        Some(PageRequest {
            page,
            page_size: self.config.page_size,
        })
    }

    /// Stores a fetched page. Results for any page other than the one in
    /// flight are stale and ignored; returns whether the page was stored.
    pub fn append_page(
        &mut self,
        page: PageIndex,
        posts: Vec<Post>,
        total_count: Option<u64>,
    ) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }
        self.in_flight = None;

        if let Some(total) = total_count {
            self.config.total_items = Some(total);
        }
        self.last_page_short = posts.len() < self.config.page_size as usize;
        self.pages.push(Page::new(page, posts));
        self.status = QueryStatus::Success;
        self.error = None;
        self.recompute_has_next_page();
        true
    }

    /// Records a failed fetch for the page in flight.
    pub fn set_error(&mut self, page: PageIndex, message: impl Into<String>) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }
        self.in_flight = None;
        self.status = QueryStatus::Error;
        self.error = Some(message.into());
        true
    }

    /// Leaves the error state and asks for the page that failed again.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.status != QueryStatus::Error {
            return None;
        }
        self.error = None;
        self.status = if self.pages.is_empty() {
            QueryStatus::Idle
        } else {
            QueryStatus::Success
        };
        self.request_next_page()
    }

    fn recompute_has_next_page(&mut self) {
        let within_limit = self
            .page_limit()
            .map_or(true, |limit| (self.pages.len() as u64) < limit);
        self.has_next_page = !self.last_page_short && within_limit;
    }

    /// Number of pages the source holds, when the total is known.
    pub fn page_limit(&self) -> Option<u64> {
        self.config
            .total_items
            .map(|total| total.div_ceil(u64::from(self.config.page_size)))
    }

    pub fn next_page_index(&self) -> PageIndex {
        self.pages.len() as PageIndex + 1
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn fetched_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// True while any fetch, initial or next-page, is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight.is_some() && !self.pages.is_empty()
    }

    pub fn in_flight(&self) -> Option<PageIndex> {
        self.in_flight
    }

    pub fn config(&self) -> PaginationConfig {
        self.config
    }
}
