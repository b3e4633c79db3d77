//! Task lifecycle status and its backing file.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// Each status owns exactly one markdown file in the data folder; the file a
/// task is stored in is the authority for its status.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is queued but not started.
    #[default]
    Backlog,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Complete,
    /// Task has been filed away.
    Archived,
}

impl TaskStatus {
    /// All statuses in canonical order.
    ///
    /// Aggregated listings follow this order.
    pub const ALL: [Self; 4] = [
        Self::Backlog,
        Self::InProgress,
        Self::Complete,
        Self::Archived,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
            Self::Archived => "archived",
        }
    }

    /// Returns the name of the markdown file holding tasks with this status.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Backlog => "backlog.md",
            Self::InProgress => "in-progress-tasks.md",
            Self::Complete => "completed-tasks.md",
            Self::Archived => "archive-tasks.md",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

/// Resolves a raw status string to the file that stores it.
///
/// # Errors
///
/// Returns [`ParseTaskStatusError`] when `status` is not one of the four
/// recognised statuses.
pub fn file_for_status(status: &str) -> Result<&'static str, ParseTaskStatusError> {
    TaskStatus::try_from(status).map(TaskStatus::file_name)
}
