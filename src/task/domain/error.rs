//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned when a status string is outside the fixed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status: {0}")]
pub struct ParseTaskStatusError(pub String);
