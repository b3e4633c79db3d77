//! Shared helpers for task board integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use local_organizer::task::{
    adapters::file::FileTaskStore, domain::TaskStatus, services::TaskBoardService,
};
use rstest::fixture;
use std::sync::Arc;
use tempfile::TempDir;

/// A task board over a temporary data folder.
pub struct FileBoard {
    _dir: TempDir,
    pub store: FileTaskStore,
    pub service: TaskBoardService<FileTaskStore>,
}

impl FileBoard {
    /// Creates a board whose data folder is `relative` inside a fresh
    /// temporary directory. The data folder itself is not created.
    pub fn in_subfolder(relative: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let root = Utf8Path::from_path(dir.path()).expect("utf-8 temporary path");
        let store = FileTaskStore::new(root.join(relative));
        let service = TaskBoardService::new(Arc::new(store.clone()));
        Self {
            _dir: dir,
            store,
            service,
        }
    }

    /// Returns the on-disk path of a status file.
    pub fn path(&self, status: TaskStatus) -> Utf8PathBuf {
        self.store.file_path(status)
    }

    /// Reads a status file straight from disk.
    pub fn read(&self, status: TaskStatus) -> String {
        std::fs::read_to_string(self.path(status)).expect("status file readable")
    }

    /// Writes a status file straight to disk, creating the folder if needed.
    pub fn write(&self, status: TaskStatus, contents: &str) {
        std::fs::create_dir_all(self.store.folder()).expect("data folder created");
        std::fs::write(self.path(status), contents).expect("status file written");
    }
}

/// Provides a board over an empty temporary data folder.
#[fixture]
pub fn file_board() -> FileBoard {
    FileBoard::in_subfolder("tasks")
}
