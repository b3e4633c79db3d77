//! Decoding of status file text into task records.

use super::fence::FencedBlocks;
use super::{
    BlockDecodeError, DESCRIPTION_KEY, LEGACY_ID_KEY, LEGACY_PARENT_ID_KEY, PARENT_TITLE_KEY,
    ParseOutcome, STATUS_KEY, SkippedBlock, TITLE_KEY,
};
use crate::task::domain::{PersistedTaskData, Task, TaskStatus};
use serde_yaml::{Mapping, Value};

/// Parses every fenced `task` block in `text`.
///
/// Every decoded task is tagged with `enforced_status`, whatever its block
/// says. Blocks that do not decode to a key/value mapping are reported in
/// [`ParseOutcome::skipped`] and contribute no task, as do regions whose
/// fence is never closed. Text outside blocks is ignored.
#[must_use]
pub fn parse(text: &str, enforced_status: TaskStatus) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for (ordinal, block) in FencedBlocks::new(text).enumerate() {
        let decoded = block
            .inner
            .ok_or(BlockDecodeError::UnclosedFence)
            .and_then(|inner| decode_block(inner, enforced_status));
        match decoded {
            Ok(task) => outcome.tasks.push(task),
            Err(reason) => outcome.skipped.push(SkippedBlock {
                ordinal,
                offset: block.offset,
                reason,
            }),
        }
    }
    outcome
}

fn decode_block(inner: &str, enforced_status: TaskStatus) -> Result<Task, BlockDecodeError> {
    let document = decode_mapping(inner)?;
    let mut data = PersistedTaskData {
        status: enforced_status,
        ..PersistedTaskData::default()
    };

    for (key, value) in document {
        match key.as_str() {
            Some(TITLE_KEY) => data.title = coerce_to_text(value),
            Some(PARENT_TITLE_KEY) => data.parent_title = Some(coerce_to_text(value)),
            Some(DESCRIPTION_KEY) => data.description = coerce_to_text(value),
            // The file decides the status; legacy identifiers are dropped.
            Some(STATUS_KEY | LEGACY_ID_KEY | LEGACY_PARENT_ID_KEY) => {}
            _ => {
                data.extra.insert(key, value);
            }
        }
    }

    Ok(Task::from_persisted(data))
}

fn decode_mapping(inner: &str) -> Result<Mapping, BlockDecodeError> {
    if inner.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_yaml::from_str(inner)
        .map_err(|err| BlockDecodeError::InvalidYaml(err.to_string()))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(BlockDecodeError::NotAMapping),
    }
}

/// Renders any YAML value as text; `null` becomes empty.
fn coerce_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        nested @ (Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_)) => {
            serde_yaml::to_string(&nested)
                .map(|rendered| rendered.trim_end().to_owned())
                .unwrap_or_default()
        }
    }
}
