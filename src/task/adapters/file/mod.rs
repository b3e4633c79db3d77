//! Filesystem adapter storing each status in its own markdown file.

mod store;

pub use store::FileTaskStore;
