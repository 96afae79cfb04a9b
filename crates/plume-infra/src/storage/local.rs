//! Directory-backed file store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use plume_core::StoreError;
use plume_core::ports::FileStore;

use super::is_plain_file_name;

/// File store rooted at a single directory.
///
/// Writes land in a hidden temporary sibling first and are then renamed over
/// the target, so a concurrent reader sees either the old or the new file,
/// never a partial one. Hidden files are excluded from [`FileStore::list`].
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Wrap an existing directory. Nothing is checked or created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory (and parents) if needed, then wrap it.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::io(root.display().to_string(), e))?;

        tracing::info!(root = %root.display(), "File store ready");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        if !is_plain_file_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(name)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(name, e)),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        let suffix = Uuid::new_v4().simple().to_string();
        let tmp = self.root.join(format!(".{}.{}.tmp", name, &suffix[..8]));

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StoreError::io(name, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                tracing::warn!(file = %tmp.display(), error = %cleanup, "Failed to remove temporary file");
            }
            return Err(StoreError::io(name, e));
        }

        tracing::debug!(file = %name, bytes = bytes.len(), "File written");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let root_name = self.root.display().to_string();
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| StoreError::io(&root_name, e))?;

        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&root_name, e))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) if !name.starts_with('.') => names.push(name),
                Ok(_) => {}
                Err(raw) => {
                    tracing::debug!(file = ?raw, "Skipping non UTF-8 file name");
                }
            }
        }

        Ok(names)
    }

    async fn remove(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.path_for(name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(name, e)),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.path_for(name)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::io(name, e))
    }
}
