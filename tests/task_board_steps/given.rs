//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use local_organizer::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all()).wrap_err("list fresh board")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {tasks:?}"));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" is in "{status}""#)]
fn task_is_in(
    world: &mut TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create(CreateTaskRequest::new(title).with_status(status)),
    )
    .wrap_err("seed task for scenario")?;
    Ok(())
}
