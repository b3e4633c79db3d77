//! Listing and maintenance reports.

use crate::task::{
    codec::SkippedBlock,
    domain::{Task, TaskAddress, TaskStatus},
};

/// Every task on the board plus the blocks that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskListing {
    tasks: Vec<Task>,
    skipped: Vec<(TaskStatus, SkippedBlock)>,
}

impl TaskListing {
    pub(super) fn extend(
        &mut self,
        status: TaskStatus,
        tasks: Vec<Task>,
        skipped: Vec<SkippedBlock>,
    ) {
        self.tasks.extend(tasks);
        self.skipped
            .extend(skipped.into_iter().map(|block| (status, block)));
    }

    /// Tasks in canonical status order, then file order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Skipped blocks with the status file they were found in.
    #[must_use]
    pub fn skipped(&self) -> &[(TaskStatus, SkippedBlock)] {
        &self.skipped
    }

    /// Consumes the listing, keeping only the tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Pairs every task with its positional address in this snapshot.
    pub fn addressed(&self) -> impl Iterator<Item = (TaskAddress, &Task)> {
        let mut current: Option<(TaskStatus, usize)> = None;
        self.tasks.iter().map(move |task| {
            let index = match current {
                Some((status, previous)) if status == task.status() => previous + 1,
                _ => 0,
            };
            current = Some((task.status(), index));
            (TaskAddress::new(task.status(), index), task)
        })
    }
}

/// Outcome of rewriting one status file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserializedFile {
    status: TaskStatus,
    kept: usize,
    purged: usize,
}

impl ReserializedFile {
    /// Status whose file was rewritten.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Number of tasks written back.
    #[must_use]
    pub const fn kept(&self) -> usize {
        self.kept
    }

    /// Number of undecodable blocks dropped from the file.
    #[must_use]
    pub const fn purged(&self) -> usize {
        self.purged
    }
}

/// Outcome of a full reserialize pass, in canonical status order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserializeReport {
    files: Vec<ReserializedFile>,
}

impl ReserializeReport {
    pub(super) fn record(&mut self, status: TaskStatus, kept: usize, purged: usize) {
        self.files.push(ReserializedFile {
            status,
            kept,
            purged,
        });
    }

    /// Per-file results.
    #[must_use]
    pub fn files(&self) -> &[ReserializedFile] {
        &self.files
    }

    /// Total tasks written back across all files.
    #[must_use]
    pub fn kept_total(&self) -> usize {
        self.files.iter().map(ReserializedFile::kept).sum()
    }

    /// Total blocks purged across all files.
    #[must_use]
    pub fn purged_total(&self) -> usize {
        self.files.iter().map(ReserializedFile::purged).sum()
    }
}
