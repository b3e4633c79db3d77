//! Storage adapters for the task board.
//!
//! This module provides concrete implementations of the [`TaskStore`] port:
//!
//! - [`file::FileTaskStore`]: one markdown file per status inside a data
//!   folder
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory text for tests
//!
//! [`TaskStore`]: crate::task::ports::TaskStore

pub mod file;
pub mod memory;
