//! In-memory file store - used in tests and for throwaway runs.

use std::collections::HashMap;
use std::io;

use async_trait::async_trait;
use tokio::sync::RwLock;

use plume_core::StoreError;
use plume_core::ports::FileStore;

use super::is_plain_file_name;

enum Slot {
    Data(Vec<u8>),
    Unreadable,
}

/// File store backed by a `HashMap` behind an async `RwLock`.
///
/// Hidden names (leading `.`) are left out of [`FileStore::list`], matching
/// [`LocalFileStore`](super::LocalFileStore).
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryFileStore {
    files: RwLock<HashMap<String, Slot>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file that shows up in listings but fails every read.
    pub async fn insert_unreadable(&self, name: &str) {
        let mut files = self.files.write().await;
        files.insert(name.to_string(), Slot::Unreadable);
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn check_name(name: &str) -> Result<(), StoreError> {
    if is_plain_file_name(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_name(name)?;

        let files = self.files.read().await;
        match files.get(name) {
            Some(Slot::Data(bytes)) => Ok(Some(bytes.clone())),
            Some(Slot::Unreadable) => Err(StoreError::io(
                name,
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable entry"),
            )),
            None => Ok(None),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        check_name(name)?;

        let mut files = self.files.write().await;
        files.insert(name.to_string(), Slot::Data(bytes.to_vec()));
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let files = self.files.read().await;
        Ok(files
            .keys()
            .filter(|name| !name.starts_with('.'))
            .cloned()
            .collect())
    }

    async fn remove(&self, name: &str) -> Result<bool, StoreError> {
        check_name(name)?;

        let mut files = self.files.write().await;
        Ok(files.remove(name).is_some())
    }

    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        check_name(name)?;

        let files = self.files.read().await;
        Ok(files.contains_key(name))
    }
}
