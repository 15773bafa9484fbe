use crate::{Page, Post};

/// Case-sensitive literal substring match on title or body.
/// An empty filter matches every post.
pub fn matches_filter(post: &Post, filter_text: &str) -> bool {
    filter_text.is_empty() || post.title.contains(filter_text) || post.body.contains(filter_text)
}

/// Flattens pages in fetch order and keeps the posts matching `filter_text`.
pub fn filter_posts<'a>(pages: &'a [Page], filter_text: &str) -> Vec<&'a Post> {
    pages
        .iter()
        .flat_map(|page| page.posts().iter())
        .filter(|post| matches_filter(post, filter_text))
        .collect()
}
