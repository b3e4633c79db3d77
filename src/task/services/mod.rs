//! Application services for task board orchestration.

mod board;
mod report;
mod requests;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
pub use report::{ReserializeReport, ReserializedFile, TaskListing};
pub use requests::{CreateTaskRequest, TaskUpdate};
