//! Folder-backed status file store.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::debug;

use crate::task::{
    domain::TaskStatus,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store backed by a data folder holding one file per status.
///
/// Writes replace the whole file. Nothing is cached between calls, so edits
/// made to the files by hand are picked up on the next read.
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    folder: Utf8PathBuf,
}

impl FileTaskStore {
    /// Creates a store rooted at `folder`. The folder is not touched until
    /// the first operation.
    #[must_use]
    pub fn new(folder: impl Into<Utf8PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Returns the data folder.
    #[must_use]
    pub fn folder(&self) -> &Utf8Path {
        &self.folder
    }

    /// Returns the path of the file holding `status` tasks.
    #[must_use]
    pub fn file_path(&self, status: TaskStatus) -> Utf8PathBuf {
        self.folder.join(status.file_name())
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&Utf8Path) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let folder = self.folder.clone();
        tokio::task::spawn_blocking(move || f(&folder))
            .await
            .map_err(TaskStoreError::persistence)?
    }
}

fn open_folder(folder: &Utf8Path) -> Result<Dir, TaskStoreError> {
    Dir::open_ambient_dir(folder, ambient_authority())
        .map_err(|err| TaskStoreError::io(folder.to_path_buf(), err))
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn ensure(&self) -> TaskStoreResult<()> {
        self.run_blocking(|folder| {
            Dir::create_ambient_dir_all(folder, ambient_authority())
                .map_err(|err| TaskStoreError::io(folder.to_path_buf(), err))?;
            let dir = open_folder(folder)?;

            // Append mode creates missing files without truncating others.
            let mut options = OpenOptions::new();
            options.create(true).append(true);
            for status in TaskStatus::ALL {
                dir.open_with(status.file_name(), &options)
                    .map_err(|err| TaskStoreError::io(folder.join(status.file_name()), err))?;
            }
            debug!(folder = %folder, "status files ensured");
            Ok(())
        })
        .await
    }

    async fn read(&self, status: TaskStatus) -> TaskStoreResult<String> {
        self.run_blocking(move |folder| {
            let dir = match Dir::open_ambient_dir(folder, ambient_authority()) {
                Ok(dir) => dir,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(String::new()),
                Err(err) => return Err(TaskStoreError::io(folder.to_path_buf(), err)),
            };
            match dir.read_to_string(status.file_name()) {
                Ok(contents) => {
                    debug!(%status, bytes = contents.len(), "status file read");
                    Ok(contents)
                }
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
                Err(err) => Err(TaskStoreError::io(folder.join(status.file_name()), err)),
            }
        })
        .await
    }

    async fn write(&self, status: TaskStatus, contents: String) -> TaskStoreResult<()> {
        self.run_blocking(move |folder| {
            let dir = open_folder(folder)?;
            dir.write(status.file_name(), &contents)
                .map_err(|err| TaskStoreError::io(folder.join(status.file_name()), err))?;
            debug!(%status, bytes = contents.len(), "status file written");
            Ok(())
        })
        .await
    }
}
