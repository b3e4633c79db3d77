//! Request payloads accepted by the task board service.

use crate::task::domain::{Task, TaskDomainError, TaskStatus};
use serde_yaml::Mapping;

/// Request payload for creating a task.
///
/// The status is kept as raw text so that an unrecognised value is reported
/// as an invalid status by the service rather than rejected by the caller's
/// type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    parent_title: Option<String>,
    status: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request for a backlog task with no parent or description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parent_title: None,
            status: TaskStatus::Backlog.as_str().to_owned(),
            description: String::new(),
        }
    }

    /// Sets the target status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the parent reference.
    #[must_use]
    pub fn with_parent_title(mut self, parent_title: impl Into<String>) -> Self {
        self.parent_title = Some(parent_title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the raw status text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub(super) fn into_task(self, status: TaskStatus) -> Result<Task, TaskDomainError> {
        let mut task = Task::new(self.title, status)?.with_description(self.description);
        if let Some(parent_title) = self.parent_title {
            task.set_parent_title(parent_title);
        }
        Ok(task)
    }
}

/// Partial update applied to an existing task.
///
/// Each field that is set replaces the stored value; unset fields are kept.
/// There is no way to clear a field through an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskUpdate {
    title: Option<String>,
    parent_title: Option<String>,
    status: Option<String>,
    description: Option<String>,
    extra: Option<Mapping>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the parent reference.
    #[must_use]
    pub fn with_parent_title(mut self, parent_title: impl Into<String>) -> Self {
        self.parent_title = Some(parent_title.into());
        self
    }

    /// Moves the task to another status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the whole set of extension fields.
    #[must_use]
    pub fn with_extra(mut self, extra: Mapping) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Returns the requested status text, if the update moves the task.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies the update to `task`, which ends up with `status`.
    pub(super) fn merge_into(
        self,
        mut task: Task,
        status: TaskStatus,
    ) -> Result<Task, TaskDomainError> {
        if let Some(title) = self.title {
            task.set_title(title)?;
        }
        if let Some(parent_title) = self.parent_title {
            task.set_parent_title(parent_title);
        }
        if let Some(description) = self.description {
            task.set_description(description);
        }
        if let Some(extra) = self.extra {
            task.replace_extra(extra);
        }
        task.set_status(status);
        Ok(task)
    }
}
