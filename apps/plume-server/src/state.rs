//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use plume_core::StoreError;
use plume_core::ports::PostRepository;
use plume_infra::{FilePostRepository, InMemoryFileStore, LocalFileStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Posts stored under `dir`, created if missing.
    pub async fn local(dir: &Path) -> Result<Self, StoreError> {
        let store = LocalFileStore::init(dir).await?;
        tracing::info!("Application state initialized");
        Ok(Self::new(Arc::new(FilePostRepository::new(store))))
    }

    /// Posts kept in memory only.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(FilePostRepository::new(InMemoryFileStore::new())))
    }
}
