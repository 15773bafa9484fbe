pub type PostId = u64;

/// 1-based index of a page as sent to the remote source.
pub type PageIndex = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// One fetched batch of posts. Never mutated after it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: PageIndex,
    posts: Vec<Post>,
}

impl Page {
    pub(crate) fn new(index: PageIndex, posts: Vec<Post>) -> Self {
        Self { index, posts }
    }

    pub fn index(&self) -> PageIndex {
        self.index
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
