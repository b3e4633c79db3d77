//! Task record stored inside status files.

use super::{TaskDomainError, TaskStatus};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// A task record.
///
/// Recognised fields are typed; any other key found in a stored block is kept
/// in [`Task::extra`] in source order so that newer writers do not lose data
/// when an older reader rewrites the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    title: String,
    parent_title: Option<String>,
    status: TaskStatus,
    description: String,
    extra: Mapping,
}

/// Parameter object for reconstructing a task decoded from storage.
///
/// Decoding does not enforce the non-empty title rule; a stored block with a
/// blank title is still surfaced so it can be repaired.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedTaskData {
    /// Stored title.
    pub title: String,
    /// Stored parent reference, if any.
    pub parent_title: Option<String>,
    /// Status enforced by the file the task was read from.
    pub status: TaskStatus,
    /// Stored description.
    pub description: String,
    /// Unrecognised keys in source order.
    pub extra: Mapping,
}

impl Task {
    /// Creates a new task with an empty description and no parent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is blank.
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validated_title(title.into())?,
            parent_title: None,
            status,
            description: String::new(),
            extra: Mapping::new(),
        })
    }

    /// Reconstructs a task from decoded storage data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            title: data.title,
            parent_title: data.parent_title.filter(|parent| !parent.is_empty()),
            status: data.status,
            description: data.description,
            extra: data.extra,
        }
    }

    /// Sets the free-text parent reference.
    #[must_use]
    pub fn with_parent_title(mut self, parent_title: impl Into<String>) -> Self {
        self.set_parent_title(parent_title);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds or replaces one extension field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(Value::String(key.into()), value.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the parent reference, if any.
    ///
    /// The reference is free text and is never checked against other tasks.
    #[must_use]
    pub fn parent_title(&self) -> Option<&str> {
        self.parent_title.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the extension fields in source order.
    #[must_use]
    pub const fn extra(&self) -> &Mapping {
        &self.extra
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is blank; the
    /// task is left unchanged.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        self.title = validated_title(title.into())?;
        Ok(())
    }

    /// Replaces the parent reference. An empty string clears it.
    pub fn set_parent_title(&mut self, parent_title: impl Into<String>) {
        let parent: String = parent_title.into();
        self.parent_title = Some(parent).filter(|value| !value.is_empty());
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the status. Callers are responsible for moving the task to
    /// the matching file.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces every extension field.
    pub fn replace_extra(&mut self, extra: Mapping) {
        self.extra = extra;
    }
}

fn validated_title(title: String) -> Result<String, TaskDomainError> {
    if title.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(title)
}
