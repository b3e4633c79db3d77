//! Markdown codec for status files.
//!
//! A status file holds zero or more fenced blocks tagged `task`, separated by
//! blank lines:
//!
//! ````text
//! ```task
//! title: Write release notes
//! parentTitle: null
//! status: backlog
//! description: ''
//! ```
//! ````
//!
//! Block content is a YAML mapping. Decoding is lenient: a block that fails
//! to decode is skipped and reported, never fatal. Encoding is canonical, so
//! a decode/encode pass normalizes formatting while preserving meaning.

mod decode;
mod encode;
mod fence;

pub use decode::parse;
pub use encode::{serialize_task, serialize_tasks};

use crate::task::domain::Task;
use thiserror::Error;

const TITLE_KEY: &str = "title";
const PARENT_TITLE_KEY: &str = "parentTitle";
const STATUS_KEY: &str = "status";
const DESCRIPTION_KEY: &str = "description";
const LEGACY_ID_KEY: &str = "id";
const LEGACY_PARENT_ID_KEY: &str = "parentId";

fn is_reserved_key(key: &str) -> bool {
    matches!(
        key,
        TITLE_KEY
            | PARENT_TITLE_KEY
            | STATUS_KEY
            | DESCRIPTION_KEY
            | LEGACY_ID_KEY
            | LEGACY_PARENT_ID_KEY
    )
}

/// Reason a fenced block was skipped while parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockDecodeError {
    /// The block content is not valid YAML.
    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    /// The block content is valid YAML but not a key/value mapping.
    #[error("block content is not a key/value mapping")]
    NotAMapping,

    /// The opening fence has no matching closing fence.
    #[error("block has no closing fence")]
    UnclosedFence,
}

/// Error returned when a task cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to encode task block: {0}")]
pub struct TaskEncodeError(pub String);

/// A fenced block that was dropped while parsing.
///
/// Skipped blocks are not written back, so they disappear from the file on
/// its next rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    ordinal: usize,
    offset: usize,
    reason: BlockDecodeError,
}

impl SkippedBlock {
    /// Zero-based position of the block among all fenced `task` blocks in
    /// the file, counting skipped ones.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Byte offset of the block's opening fence.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Why the block was skipped.
    #[must_use]
    pub const fn reason(&self) -> &BlockDecodeError {
        &self.reason
    }
}

/// Result of parsing one status file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    tasks: Vec<Task>,
    skipped: Vec<SkippedBlock>,
}

impl ParseOutcome {
    /// Decoded tasks in file order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Blocks that failed to decode, in file order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedBlock] {
        &self.skipped
    }

    /// Consumes the outcome, keeping only the decoded tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Consumes the outcome into tasks and skipped blocks.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Task>, Vec<SkippedBlock>) {
        (self.tasks, self.skipped)
    }
}
