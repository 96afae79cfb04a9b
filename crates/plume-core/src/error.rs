//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with handle {handle}")]
    NotFound {
        entity_type: &'static str,
        handle: String,
    },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl DomainError {
    /// Shorthand for a missing post.
    pub fn post_not_found(handle: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Post",
            handle: handle.into(),
        }
    }
}

/// File store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed for {name}: {message}")]
    Serialization { name: String, message: String },

    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    #[error("Could not allocate a unique handle for title {0:?}")]
    HandleExhausted(String),
}

impl StoreError {
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            source,
        }
    }

    pub fn serialization(name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            name: name.into(),
            message: err.to_string(),
        }
    }
}
