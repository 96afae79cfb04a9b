use async_trait::async_trait;

use crate::error::StoreError;

/// Flat store of named files - abstraction over a directory on disk or an
/// in-memory map.
///
/// Names are plain file names, never paths.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read a file. Returns `None` when it does not exist.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Create or fully overwrite a file.
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Names of every file in the store, in no particular order.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Remove a file. Returns `false` when it did not exist.
    async fn remove(&self, name: &str) -> Result<bool, StoreError>;

    /// Check if a file exists.
    async fn exists(&self, name: &str) -> Result<bool, StoreError>;
}
