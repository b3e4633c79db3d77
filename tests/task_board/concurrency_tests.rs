//! Unsynchronized read-modify-write cycles.
//!
//! The board holds no lock, so two writers that read the same snapshot race
//! and the later write wins.

use async_trait::async_trait;
use local_organizer::task::{
    adapters::memory::InMemoryTaskStore,
    domain::TaskStatus,
    ports::{TaskStore, TaskStoreResult},
    services::{CreateTaskRequest, TaskBoardService},
};
use rstest::rstest;
use std::sync::Arc;
use tokio::sync::Barrier;

/// Store that holds every read until two readers have arrived.
struct LockstepStore {
    inner: InMemoryTaskStore,
    barrier: Barrier,
}

#[async_trait]
impl TaskStore for LockstepStore {
    async fn ensure(&self) -> TaskStoreResult<()> {
        self.inner.ensure().await
    }

    async fn read(&self, status: TaskStatus) -> TaskStoreResult<String> {
        let text = self.inner.read(status).await?;
        self.barrier.wait().await;
        Ok(text)
    }

    async fn write(&self, status: TaskStatus, contents: String) -> TaskStoreResult<()> {
        self.inner.write(status, contents).await
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_on_one_status_lose_an_update() {
    let inner = InMemoryTaskStore::new();
    let store = LockstepStore {
        inner: inner.clone(),
        barrier: Barrier::new(2),
    };
    let service = TaskBoardService::new(Arc::new(store));

    let (first, second) = tokio::join!(
        service.create(CreateTaskRequest::new("first")),
        service.create(CreateTaskRequest::new("second")),
    );
    first.expect("first create should succeed");
    second.expect("second create should succeed");

    let survivors = local_organizer::task::codec::parse(
        &inner
            .contents(TaskStatus::Backlog)
            .expect("store readable")
            .unwrap_or_default(),
        TaskStatus::Backlog,
    )
    .into_tasks();
    assert_eq!(survivors.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequential_creates_keep_every_task() {
    let store = InMemoryTaskStore::new();
    let service = TaskBoardService::new(Arc::new(store.clone()));

    service
        .create(CreateTaskRequest::new("first"))
        .await
        .expect("first create should succeed");
    service
        .create(CreateTaskRequest::new("second"))
        .await
        .expect("second create should succeed");

    let tasks = service
        .list_by_status("backlog")
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}
