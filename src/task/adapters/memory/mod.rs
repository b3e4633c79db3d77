//! In-memory adapter implementations for testing.
//!
//! The in-memory store keeps status file text in process so services can be
//! exercised without touching the filesystem.

mod store;

pub use store::InMemoryTaskStore;
