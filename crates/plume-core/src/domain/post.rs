use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author recorded when none is given.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// Post entity - one blog entry, stored as one file.
///
/// `handle` is never written into the file; it is reattached from the file
/// name whenever a post is read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub handle: String,
}

/// Input for creating a post. Presence of title and content is checked by the
/// caller; this layer only trims and defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Post {
    /// Create a new post under the given handle.
    pub fn new(input: NewPost, handle: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            content: input.content.trim().to_string(),
            author: normalize_author(input.author),
            tags: clean_tags(input.tags),
            created_at: now,
            updated_at: now,
            handle,
        }
    }

    /// Merge `changes` over this post and refresh `updated_at`.
    ///
    /// `id`, `created_at` and `handle` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title.trim().to_string();
        }
        if let Some(content) = changes.content {
            self.content = content.trim().to_string();
        }
        if let Some(author) = changes.author {
            self.author = normalize_author(Some(author));
        }
        if let Some(tags) = changes.tags {
            self.tags = clean_tags(tags);
        }
        self.touch();
    }

    /// Case-insensitive substring match against title, content and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Case-insensitive exact tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    // Timestamps must strictly increase even when the clock has not advanced
    // since the last write.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tokens.
///
/// Order, duplicates and casing are preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn normalize_author(author: Option<String>) -> String {
    author
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(default_author)
}
