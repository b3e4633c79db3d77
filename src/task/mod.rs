//! Markdown-backed task board.
//!
//! Tasks live as fenced `task` blocks in four markdown files, one per
//! status. The file a task sits in decides its status, and a task is
//! addressed by its status plus its position in that file. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Text encoding in [`codec`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
