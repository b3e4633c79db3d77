//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use local_organizer::task::{domain::TaskStatus, services::TaskBoardError};
use rstest_bdd_macros::then;

fn titles_in(world: &TaskBoardWorld, status: &str) -> Result<Vec<String>, eyre::Report> {
    let tasks = run_async(world.service.list_by_status(status))
        .wrap_err_with(|| format!("list {status} tasks"))?;
    Ok(tasks.iter().map(|task| task.title().to_owned()).collect())
}

#[then("the board lists {count:usize} task")]
fn board_lists(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all()).wrap_err("list board")?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the "{status}" file holds the titles "{titles}""#)]
fn file_holds_titles(
    world: &TaskBoardWorld,
    status: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let expected: Vec<String> = titles.split(", ").map(str::to_owned).collect();
    let found = titles_in(world, &status)?;
    if found != expected {
        return Err(eyre::eyre!("expected {expected:?} in {status}, found {found:?}"));
    }
    Ok(())
}

#[then(r#"the "{status}" file holds no tasks"#)]
fn file_holds_no_tasks(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let found = titles_in(world, &status)?;
    if !found.is_empty() {
        return Err(eyre::eyre!("expected no tasks in {status}, found {found:?}"));
    }
    Ok(())
}

#[then("the operation fails with an invalid status error")]
fn fails_with_invalid_status(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    if !matches!(result, Err(TaskBoardError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("nothing was deleted")]
fn nothing_deleted(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match world.last_deleted {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected no deletion, got {other:?}")),
    }
}

#[then(r#"the moved task has status "{status}""#)]
fn moved_task_has_status(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .last_moved
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing moved task"))?;
    if task.status() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", task.status()));
    }
    Ok(())
}
