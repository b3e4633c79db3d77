//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use local_organizer::task::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::{TaskBoardError, TaskBoardService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryTaskStore>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestBoardService,
    pub last_created: Option<Result<Task, TaskBoardError>>,
    pub last_moved: Option<Task>,
    pub last_deleted: Option<bool>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskBoardService::new(Arc::new(InMemoryTaskStore::new())),
            last_created: None,
            last_moved: None,
            last_deleted: None,
        }
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
