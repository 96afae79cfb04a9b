use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostListing};
use crate::error::StoreError;

/// Post repository - every operation the request handlers need.
///
/// Not-found is a return value (`None` / `false`), never an error. Bulk reads
/// cannot fail; per-file problems are reported in [`PostListing::warnings`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `created_at` first.
    async fn list_all(&self) -> PostListing;

    /// Find a post by its handle. Missing and unreadable files both yield `None`.
    async fn get_by_handle(&self, handle: &str) -> Option<Post>;

    /// Assign id, timestamps and handle, then persist.
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Merge `changes` over the stored post and rewrite it.
    async fn update(&self, handle: &str, changes: PostChanges)
    -> Result<Option<Post>, StoreError>;

    /// Remove a post. Returns `false` when no such post exists.
    async fn delete(&self, handle: &str) -> Result<bool, StoreError>;

    /// Posts whose title, content or any tag contains `query`, ignoring case.
    ///
    /// An empty query matches every post.
    async fn search(&self, query: &str) -> PostListing {
        self.list_all()
            .await
            .retain(|post| post.matches_query(query))
    }

    /// Posts carrying `tag`, compared case-insensitively but exactly.
    async fn filter_by_tag(&self, tag: &str) -> PostListing {
        self.list_all().await.retain(|post| post.has_tag(tag))
    }
}
