//! Domain model for the markdown task board.
//!
//! The domain covers the fixed status registry, the task record, and
//! positional addressing. It has no knowledge of files or text encoding.

mod address;
mod error;
mod status;
mod task;

pub use address::TaskAddress;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use status::{TaskStatus, file_for_status};
pub use task::{PersistedTaskData, Task};
