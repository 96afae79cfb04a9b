use serde::Serialize;

use super::Post;

/// A file that was skipped while listing the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListWarning {
    pub file: String,
    pub reason: String,
}

/// Result of a whole-collection read.
///
/// Listing never fails outright: files that cannot be read or parsed are left
/// out of `posts` and recorded in `warnings` instead.
#[derive(Debug, Clone, Default)]
pub struct PostListing {
    pub posts: Vec<Post>,
    pub warnings: Vec<ListWarning>,
}

impl PostListing {
    pub fn new(posts: Vec<Post>, warnings: Vec<ListWarning>) -> Self {
        Self { posts, warnings }
    }

    /// Keep only the posts matching `predicate`; warnings are carried over.
    pub fn retain(mut self, predicate: impl Fn(&Post) -> bool) -> Self {
        self.posts.retain(|post| predicate(post));
        self
    }

    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
