//! In-memory status file store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskStatus,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory replacement for a data folder.
///
/// Clones share the same underlying files.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    files: HashMap<TaskStatus, String>,
}

impl InMemoryTaskStore {
    /// Creates a store with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose `status` file already holds `contents`.
    #[must_use]
    pub fn with_contents(status: TaskStatus, contents: impl Into<String>) -> Self {
        let mut state = InMemoryStoreState::default();
        state.files.insert(status, contents.into());
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the stored text for `status`, or `None` when the file has not
    /// been created.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn contents(&self, status: TaskStatus) -> TaskStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.files.get(&status).cloned())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn ensure(&self) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        for status in TaskStatus::ALL {
            state.files.entry(status).or_default();
        }
        Ok(())
    }

    async fn read(&self, status: TaskStatus) -> TaskStoreResult<String> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.files.get(&status).cloned().unwrap_or_default())
    }

    async fn write(&self, status: TaskStatus, contents: String) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.files.insert(status, contents);
        Ok(())
    }
}
