//! # Plume Core
//!
//! The domain layer of Plume, a file-backed micro-blog.
//! This crate holds the `Post` entity, handle generation, and the port traits
//! that storage implementations must satisfy. It performs no I/O itself.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, StoreError};
