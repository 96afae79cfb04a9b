//! # Plume Infrastructure
//!
//! Concrete implementations of the ports defined in `plume-core`.
//!
//! - [`LocalFileStore`] - one directory on disk, accessed through `tokio::fs`
//! - [`InMemoryFileStore`] - a map behind an async lock, for tests and ephemeral runs
//! - [`FilePostRepository`] - the post storage accessor, generic over either store

pub mod storage;

pub use storage::{FilePostRepository, InMemoryFileStore, LocalFileStore};
