//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Directory used when `POSTS_DIR` is not set.
const DEFAULT_POSTS_DIR: &str = "data/posts";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding one JSON file per post.
    pub posts_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            posts_dir: env::var("POSTS_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_DIR)),
        }
    }
}
