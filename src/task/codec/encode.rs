//! Canonical rendering of task records as fenced blocks.

use super::fence::{CLOSING_FENCE, OPENING_FENCE};
use super::{
    DESCRIPTION_KEY, PARENT_TITLE_KEY, STATUS_KEY, TITLE_KEY, TaskEncodeError, is_reserved_key,
};
use crate::task::domain::Task;
use serde_yaml::{Mapping, Value};

/// Renders one task as a fenced `task` block ending in a newline.
///
/// Keys are written as `title`, `parentTitle`, `status`, `description`, then
/// extension fields in stored order. Extension keys that collide with a
/// recognised or legacy key are not written.
///
/// # Errors
///
/// Returns [`TaskEncodeError`] when an extension value cannot be rendered as
/// YAML.
pub fn serialize_task(task: &Task) -> Result<String, TaskEncodeError> {
    let mut document = Mapping::new();
    document.insert(Value::from(TITLE_KEY), Value::from(task.title()));
    document.insert(
        Value::from(PARENT_TITLE_KEY),
        task.parent_title().map_or(Value::Null, Value::from),
    );
    document.insert(Value::from(STATUS_KEY), Value::from(task.status().as_str()));
    document.insert(
        Value::from(DESCRIPTION_KEY),
        Value::from(task.description()),
    );
    for (key, value) in task.extra() {
        if key.as_str().is_some_and(is_reserved_key) {
            continue;
        }
        document.insert(key.clone(), value.clone());
    }

    let yaml = serde_yaml::to_string(&document)
        .map_err(|err| TaskEncodeError(err.to_string()))?;
    Ok(format!("{OPENING_FENCE}\n{yaml}{CLOSING_FENCE}\n"))
}

/// Renders a full status file: blocks in order separated by a blank line.
///
/// An empty list renders as empty text.
///
/// # Errors
///
/// Returns [`TaskEncodeError`] when any task fails to render.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, TaskEncodeError> {
    let blocks = tasks
        .iter()
        .map(serialize_task)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n"))
}
