//! Post repository over a [`FileStore`] - one JSON file per post.

use async_trait::async_trait;

use plume_core::StoreError;
use plume_core::domain::{
    ListWarning, NewPost, Post, PostChanges, PostListing, generate_handle, is_valid_handle,
};
use plume_core::ports::{FileStore, PostRepository};

/// Extension of every post file. The handle is the file name without it.
const EXTENSION: &str = ".json";

/// Fresh suffixes drawn before giving up on a colliding handle.
const MAX_HANDLE_ATTEMPTS: usize = 5;

/// Name used in warnings about the store as a whole.
const STORE_MARKER: &str = "<store>";

fn file_name(handle: &str) -> String {
    format!("{handle}{EXTENSION}")
}

/// File-backed post repository.
///
/// Every read goes to the store; there is no cache and no index. Writes are
/// last-writer-wins.
pub struct FilePostRepository<S> {
    store: S,
}

impl<S: FileStore> FilePostRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn read_post(&self, handle: &str) -> Result<Option<Post>, StoreError> {
        let name = file_name(handle);
        let Some(bytes) = self.store.read(&name).await? else {
            return Ok(None);
        };

        let mut post: Post =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(&name, e))?;
        post.handle = handle.to_string();
        Ok(Some(post))
    }

    async fn write_post(&self, post: &Post) -> Result<(), StoreError> {
        let name = file_name(&post.handle);
        let bytes =
            serde_json::to_vec_pretty(post).map_err(|e| StoreError::serialization(&name, e))?;
        self.store.write(&name, &bytes).await
    }

    async fn allocate_handle(&self, title: &str) -> Result<String, StoreError> {
        for _ in 0..MAX_HANDLE_ATTEMPTS {
            let handle = generate_handle(title);
            if !self.store.exists(&file_name(&handle)).await? {
                return Ok(handle);
            }
            tracing::debug!(handle = %handle, "Handle collision, drawing a new suffix");
        }
        Err(StoreError::HandleExhausted(title.to_string()))
    }
}

#[async_trait]
impl<S: FileStore> PostRepository for FilePostRepository<S> {
    async fn list_all(&self) -> PostListing {
        let names = match self.store.list().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list post files");
                return PostListing::new(
                    Vec::new(),
                    vec![ListWarning {
                        file: STORE_MARKER.to_string(),
                        reason: e.to_string(),
                    }],
                );
            }
        };

        let mut posts = Vec::with_capacity(names.len());
        let mut warnings = Vec::new();

        for name in names {
            let Some(handle) = name.strip_suffix(EXTENSION) else {
                continue;
            };

            // Listed posts must be reachable through get_by_handle.
            if !is_valid_handle(handle) {
                tracing::warn!(file = %name, "Skipping post file with an unusable handle");
                warnings.push(ListWarning {
                    file: name.clone(),
                    reason: "file name is not a valid post handle".to_string(),
                });
                continue;
            }

            match self.read_post(handle).await {
                Ok(Some(post)) => posts.push(post),
                // Removed between list and read.
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Skipping unreadable post file");
                    warnings.push(ListWarning {
                        file: name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(
            posts = posts.len(),
            skipped = warnings.len(),
            "Listed posts"
        );

        PostListing::new(posts, warnings)
    }

    async fn get_by_handle(&self, handle: &str) -> Option<Post> {
        if !is_valid_handle(handle) {
            return None;
        }

        match self.read_post(handle).await {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!(handle = %handle, error = %e, "Failed to load post");
                None
            }
        }
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let handle = self.allocate_handle(new_post.title.trim()).await?;
        let post = Post::new(new_post, handle);

        self.write_post(&post).await?;

        tracing::info!(handle = %post.handle, id = %post.id, "Post created");
        Ok(post)
    }

    async fn update(
        &self,
        handle: &str,
        changes: PostChanges,
    ) -> Result<Option<Post>, StoreError> {
        if !is_valid_handle(handle) {
            return Ok(None);
        }

        // Corrupt files read as missing; I/O failures reach the caller.
        let mut post = match self.read_post(handle).await {
            Ok(Some(post)) => post,
            Ok(None) => return Ok(None),
            Err(StoreError::Serialization { name, message }) => {
                tracing::warn!(file = %name, error = %message, "Cannot update corrupt post");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        post.apply(changes);
        self.write_post(&post).await?;

        tracing::info!(handle = %post.handle, "Post updated");
        Ok(Some(post))
    }

    async fn delete(&self, handle: &str) -> Result<bool, StoreError> {
        if !is_valid_handle(handle) {
            return Ok(false);
        }

        let removed = self.store.remove(&file_name(handle)).await?;
        if removed {
            tracing::info!(handle = %handle, "Post deleted");
        }
        Ok(removed)
    }
}
