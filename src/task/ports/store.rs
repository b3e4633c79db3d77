//! Storage port for status file text.

use crate::task::domain::TaskStatus;
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Raw text storage keyed by status.
///
/// A store knows nothing about task blocks: it hands whole file contents to
/// the service and overwrites whole files on request. There is no locking;
/// concurrent writers to the same status race and the last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates the backing location and an empty file for every status that
    /// does not have one yet. Existing content is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the location cannot be created.
    async fn ensure(&self) -> TaskStoreResult<()>;

    /// Returns the full text stored for `status`.
    ///
    /// A missing file reads as empty text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the file exists but cannot be read.
    async fn read(&self, status: TaskStatus) -> TaskStoreResult<String>;

    /// Replaces the full text stored for `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the file cannot be written.
    async fn write(&self, status: TaskStatus, contents: String) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A filesystem operation failed.
    #[error("task file {path} is inaccessible: {source}")]
    Io {
        /// Path that was being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// Persistence-layer failure outside plain file access.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps an I/O error raised while accessing `path`.
    pub fn io(path: impl Into<Utf8PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
