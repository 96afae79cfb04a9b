//! Post handles - the external identifier used in every lookup.
//!
//! A handle is `slug(title) + "-" + suffix`, where the suffix is a short random
//! hex string. Handles are assigned once at creation and never recomputed.

use uuid::Uuid;

/// Length of the random suffix appended to every handle.
pub const SUFFIX_LEN: usize = 8;

/// Slugs are capped so handles stay well under filesystem name limits.
const MAX_SLUG_LEN: usize = 64;

/// Slug used when a title has no ASCII alphanumerics at all.
const FALLBACK_SLUG: &str = "post";

/// Lowercase, hyphen-separated, URL-safe form of a title.
///
/// Runs of anything other than ASCII letters and digits collapse into a single
/// hyphen, and leading/trailing hyphens are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            let dash = pending_dash && !slug.is_empty();
            if slug.len() + usize::from(dash) + 1 > MAX_SLUG_LEN {
                break;
            }
            if dash {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Generate a fresh handle for a post with the given title.
///
/// Uniqueness rests on the random suffix; callers that need a hard guarantee
/// must check the store for an existing handle and retry.
pub fn generate_handle(title: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", slugify(title), &suffix[..SUFFIX_LEN])
}

/// Whether a caller-supplied handle is safe to map onto a file name.
pub fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && !handle.starts_with('.')
        && !handle.contains("..")
        && !handle.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("Rust & Go: a--comparison"), "rust-go-a-comparison");
    }

    #[test]
    fn test_slugify_without_alphanumerics_falls_back() {
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify("日本語"), "post");
    }

    #[test]
    fn test_slugify_caps_length() {
        let title = "word ".repeat(40);
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));

        let title = format!("{} b", "a".repeat(MAX_SLUG_LEN - 1));
        assert_eq!(slugify(&title), "a".repeat(MAX_SLUG_LEN - 1));

        let title = format!("{} b", "a".repeat(MAX_SLUG_LEN - 2));
        assert_eq!(slugify(&title).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_generate_handle_shape() {
        let handle = generate_handle("My First Post");
        let suffix = handle.strip_prefix("my-first-post-").unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_handle_differs_per_call() {
        assert_ne!(generate_handle("Same"), generate_handle("Same"));
    }

    #[test]
    fn test_is_valid_handle() {
        assert!(is_valid_handle("my-first-post-1a2b3c4d"));
        assert!(!is_valid_handle(""));
        assert!(!is_valid_handle("../etc/passwd"));
        assert!(!is_valid_handle("a/b"));
        assert!(!is_valid_handle("a\\b"));
        assert!(!is_valid_handle(".hidden"));
    }
}
