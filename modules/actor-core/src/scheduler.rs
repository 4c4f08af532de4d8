//! Scheduler package.
//!
//! Contains the cooperative execution surface and the FIFO coordinator
//! driving resumable tasks.

mod coordinator;
mod execution_unit;
mod resumable;

pub use coordinator::Coordinator;
pub use execution_unit::ExecutionUnit;
pub use resumable::{Resumable, ResumeResult};
