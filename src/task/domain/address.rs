//! Positional task addressing.

use super::TaskStatus;
use serde::Serialize;
use std::fmt;

/// Location of a task inside one status file.
///
/// Tasks carry no persistent identifier. An address is the status file plus
/// the zero-based position of the task in the list parsed from that file, and
/// it is only meaningful for the snapshot it was computed from: any create,
/// move, or delete against the same file may shift it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskAddress {
    status: TaskStatus,
    index: usize,
}

impl TaskAddress {
    /// Creates an address for `index` within the `status` file.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }

    /// Returns the status file component.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        self.status
    }

    /// Returns the positional component.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for TaskAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.status, self.index)
    }
}
