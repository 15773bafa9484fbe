use crate::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine for one page of posts.
    FetchPage(PageRequest),
    /// Reset the list viewport to its first row.
    ScrollToTop,
}
