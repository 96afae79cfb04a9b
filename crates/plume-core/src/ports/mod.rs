//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod file_store;
mod repository;

pub use file_store::FileStore;
pub use repository::PostRepository;
