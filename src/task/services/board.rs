//! Task board orchestration over a status file store.

use super::{CreateTaskRequest, ReserializeReport, TaskListing, TaskUpdate};
use crate::task::{
    codec::{self, ParseOutcome, TaskEncodeError},
    domain::{ParseTaskStatusError, Task, TaskDomainError, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// A requested or resulting status is not one of the four statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// A task could not be rendered for storage.
    #[error(transparent)]
    Encode(#[from] TaskEncodeError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
///
/// Every operation is a self-contained read-modify-write cycle against the
/// store. Positional indexes are resolved against the file contents read by
/// the operation itself; nothing is cached between calls.
#[derive(Clone)]
pub struct TaskBoardService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskBoardService<S>
where
    S: TaskStore,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists every task, in canonical status order and then file order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when a status file cannot be read.
    pub async fn list_all(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.scan_all().await?.into_tasks())
    }

    /// Lists every task together with the blocks that were skipped.
    ///
    /// The four status files are read concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when a status file cannot be read.
    pub async fn scan_all(&self) -> TaskBoardResult<TaskListing> {
        self.store.ensure().await?;
        let (backlog, in_progress, complete, archived) = tokio::try_join!(
            self.load(TaskStatus::Backlog),
            self.load(TaskStatus::InProgress),
            self.load(TaskStatus::Complete),
            self.load(TaskStatus::Archived),
        )?;

        let mut listing = TaskListing::default();
        let outcomes = [backlog, in_progress, complete, archived];
        for (status, outcome) in TaskStatus::ALL.into_iter().zip(outcomes) {
            let (tasks, skipped) = outcome.into_parts();
            listing.extend(status, tasks, skipped);
        }
        Ok(listing)
    }

    /// Lists the tasks stored under one status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidStatus`] for an unknown status or
    /// [`TaskBoardError::Store`] when the file cannot be read.
    pub async fn list_by_status(&self, status: &str) -> TaskBoardResult<Vec<Task>> {
        let target = TaskStatus::try_from(status)?;
        self.store.ensure().await?;
        Ok(self.load(target).await?.into_tasks())
    }

    /// Appends a new task to the end of its status file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidStatus`] for an unknown status,
    /// [`TaskBoardError::Domain`] for a blank title, or a store/encode error
    /// when the file cannot be rewritten.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let target = TaskStatus::try_from(request.status())?;
        let task = request.into_task(target)?;

        self.store.ensure().await?;
        let mut tasks = self.load(target).await?.into_tasks();
        tasks.push(task.clone());
        self.save(target, &tasks).await?;

        info!(
            status = %target,
            index = tasks.len().saturating_sub(1),
            title = task.title(),
            "task created"
        );
        Ok(task)
    }

    /// Applies `update` to the task at `index` in the `status` file.
    ///
    /// When the update keeps the status, the task is replaced in place. When
    /// it changes the status, the task is appended to the destination file,
    /// which is written first, and then removed from the source file. An
    /// interruption between the two writes leaves the task in both files.
    ///
    /// Returns `Ok(None)` without writing when `index` is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidStatus`] when `status` or the
    /// requested status is unknown, [`TaskBoardError::Domain`] when the
    /// update sets a blank title, or a store/encode error on I/O failure.
    pub async fn update_by_index(
        &self,
        status: &str,
        index: usize,
        update: TaskUpdate,
    ) -> TaskBoardResult<Option<Task>> {
        let source = TaskStatus::try_from(status)?;
        let destination = update
            .status()
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or(source);

        self.store.ensure().await?;
        let mut tasks = self.load(source).await?.into_tasks();
        let Some(current) = tasks.get(index).cloned() else {
            debug!(status = %source, index, "update target out of bounds");
            return Ok(None);
        };
        let updated = update.merge_into(current, destination)?;

        if destination == source {
            if let Some(slot) = tasks.get_mut(index) {
                slot.clone_from(&updated);
            }
            self.save(source, &tasks).await?;
            info!(status = %source, index, "task updated");
        } else {
            self.move_task(source, tasks, index, &updated).await?;
        }
        Ok(Some(updated))
    }

    /// Removes the task at `index` from the `status` file.
    ///
    /// Returns `Ok(false)` without writing when `index` is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidStatus`] for an unknown status or a
    /// store/encode error on I/O failure.
    pub async fn delete_by_index(&self, status: &str, index: usize) -> TaskBoardResult<bool> {
        let target = TaskStatus::try_from(status)?;

        self.store.ensure().await?;
        let mut tasks = self.load(target).await?.into_tasks();
        if index >= tasks.len() {
            debug!(status = %target, index, "delete target out of bounds");
            return Ok(false);
        }
        let removed = tasks.remove(index);
        self.save(target, &tasks).await?;

        info!(status = %target, index, title = removed.title(), "task deleted");
        Ok(true)
    }

    /// Reads, parses, and rewrites every status file.
    ///
    /// Only decoded tasks are written back, so undecodable blocks and any
    /// text outside task blocks are removed for good.
    ///
    /// # Errors
    ///
    /// Returns a store/encode error when a file cannot be read or rewritten.
    /// Files processed before the failure stay rewritten.
    pub async fn reserialize_all(&self) -> TaskBoardResult<ReserializeReport> {
        self.store.ensure().await?;
        let mut report = ReserializeReport::default();
        for status in TaskStatus::ALL {
            let (tasks, skipped) = self.load(status).await?.into_parts();
            self.save(status, &tasks).await?;
            report.record(status, tasks.len(), skipped.len());
        }

        info!(
            kept = report.kept_total(),
            purged = report.purged_total(),
            "status files reserialized"
        );
        Ok(report)
    }

    async fn move_task(
        &self,
        source: TaskStatus,
        mut source_tasks: Vec<Task>,
        index: usize,
        task: &Task,
    ) -> TaskBoardResult<()> {
        let destination = task.status();
        let mut destination_tasks = self.load(destination).await?.into_tasks();
        destination_tasks.push(task.clone());

        // The destination is written before the source: an interrupted move
        // duplicates the task instead of dropping it.
        self.save(destination, &destination_tasks).await?;
        source_tasks.remove(index);
        self.save(source, &source_tasks).await?;

        info!(from = %source, to = %destination, index, "task moved");
        Ok(())
    }

    async fn load(&self, status: TaskStatus) -> TaskBoardResult<ParseOutcome> {
        let text = self.store.read(status).await?;
        let outcome = codec::parse(&text, status);
        for block in outcome.skipped() {
            warn!(
                %status,
                ordinal = block.ordinal(),
                offset = block.offset(),
                reason = %block.reason(),
                "skipping undecodable task block"
            );
        }
        Ok(outcome)
    }

    async fn save(&self, status: TaskStatus, tasks: &[Task]) -> TaskBoardResult<()> {
        let text = codec::serialize_tasks(tasks)?;
        self.store.write(status, text).await?;
        debug!(%status, count = tasks.len(), "status file saved");
        Ok(())
    }
}
