//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use local_organizer::task::services::{CreateTaskRequest, TaskUpdate};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is created in "{status}""#)]
fn create_task(world: &mut TaskBoardWorld, title: String, status: String) {
    let result = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title).with_status(status)),
    );
    world.last_created = Some(result);
}

#[when(r#"the task at "{status}" index {index:usize} is moved to "{target}""#)]
fn move_task(
    world: &mut TaskBoardWorld,
    status: String,
    index: usize,
    target: String,
) -> Result<(), eyre::Report> {
    let moved = run_async(world.service.update_by_index(
        &status,
        index,
        TaskUpdate::new().with_status(target),
    ))
    .wrap_err("move task in scenario")?;
    world.last_moved = moved;
    Ok(())
}

#[when(r#"the task at "{status}" index {index:usize} is deleted"#)]
fn delete_task(
    world: &mut TaskBoardWorld,
    status: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let deleted = run_async(world.service.delete_by_index(&status, index))
        .wrap_err("delete task in scenario")?;
    world.last_deleted = Some(deleted);
    Ok(())
}
