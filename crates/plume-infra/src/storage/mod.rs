//! File stores and the post repository built on top of them.

mod local;
mod memory;
mod post_repo;

pub use local::LocalFileStore;
pub use memory::InMemoryFileStore;
pub use post_repo::FilePostRepository;

/// File names the stores refuse: anything that could resolve outside the root.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
