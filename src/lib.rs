//! Local organizer: a task board stored in plain markdown files.
//!
//! This crate persists task records as fenced blocks inside one markdown
//! file per lifecycle status and exposes list, create, update, delete, and
//! reserialize operations over them. There is no database: the files are
//! the source of truth and can be edited by hand.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and status types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract storage interfaces
//! - **Adapters**: Folder-backed and in-memory storage
//!
//! # Modules
//!
//! - [`task`]: Status registry, markdown codec, storage, and board service
//! - [`config`]: Data folder configuration

pub mod config;
pub mod task;
