//! Runs maintenance commands against a local organizer data folder.
//!
//! Usage:
//!
//! ```text
//! organizer-maintain <command> [folder]
//! ```
//!
//! The `command` must be `list` or `reserialize`. When `folder` is omitted
//! the folder named by `ORGANIZER_DATA_FOLDER` is used, falling back to the
//! current working directory.
//!
//! - `list` logs every task with its positional address, plus any block that
//!   could not be decoded.
//! - `reserialize` rewrites every status file in canonical form, dropping
//!   undecodable blocks and text outside task blocks.
//!
//! Output goes through `tracing` on standard error; set `RUST_LOG` to adjust
//! verbosity.

use local_organizer::config::{ConfigError, OrganizerConfig};
use local_organizer::task::{
    ports::TaskStore,
    services::{TaskBoardError, TaskBoardService},
};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Errors that can occur while running a maintenance command.
#[derive(Debug, Error)]
enum MaintainError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Board(#[from] TaskBoardError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Reserialize,
}

impl Operation {
    fn parse(arg: &str) -> Result<Self, MaintainError> {
        match arg {
            "list" => Ok(Self::List),
            "reserialize" => Ok(Self::Reserialize),
            other => Err(MaintainError::InvalidArgs(format!(
                "unknown command '{other}'; expected list or reserialize"
            ))),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ MaintainError::InvalidArgs(_)) => {
            error!(%err, "usage: organizer-maintain <list|reserialize> [folder]");
            ExitCode::from(2)
        }
        Err(err) => {
            error!(%err, "maintenance command failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: impl Iterator<Item = String>) -> Result<(), MaintainError> {
    let (operation, folder) = parse_args(args)?;
    let config = folder.map_or_else(OrganizerConfig::from_env, OrganizerConfig::new)?;
    info!(folder = %config.data_folder(), "using data folder");

    let service = TaskBoardService::new(Arc::new(config.store()));
    let runtime = build_runtime()?;
    runtime.block_on(execute(operation, &service))
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(Operation, Option<String>), MaintainError> {
    let _program = args.next();
    let operation = args
        .next()
        .ok_or_else(|| MaintainError::InvalidArgs("missing command argument".into()))
        .and_then(|arg| Operation::parse(&arg))?;
    let folder = args.next();
    if let Some(extra) = args.next() {
        return Err(MaintainError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok((operation, folder))
}

fn build_runtime() -> Result<tokio::runtime::Runtime, MaintainError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(MaintainError::RuntimeInit)
}

async fn execute<S: TaskStore>(
    operation: Operation,
    service: &TaskBoardService<S>,
) -> Result<(), MaintainError> {
    match operation {
        Operation::List => {
            let listing = service.scan_all().await?;
            for (address, task) in listing.addressed() {
                info!(
                    %address,
                    title = task.title(),
                    parent = task.parent_title().unwrap_or_default(),
                    "task"
                );
            }
            for (status, block) in listing.skipped() {
                warn!(
                    %status,
                    ordinal = block.ordinal(),
                    reason = %block.reason(),
                    "undecodable block"
                );
            }
            info!(count = listing.tasks().len(), "listing complete");
        }
        Operation::Reserialize => {
            let report = service.reserialize_all().await?;
            for file in report.files() {
                info!(
                    status = %file.status(),
                    kept = file.kept(),
                    purged = file.purged(),
                    "status file rewritten"
                );
            }
        }
    }
    Ok(())
}
