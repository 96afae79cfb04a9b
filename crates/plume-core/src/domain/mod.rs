//! Domain entities - the core business objects.

mod handle;
mod listing;
mod post;

pub use handle::{SUFFIX_LEN, generate_handle, is_valid_handle, slugify};
pub use listing::{ListWarning, PostListing};
pub use post::{DEFAULT_AUTHOR, NewPost, Post, PostChanges, parse_tags};
