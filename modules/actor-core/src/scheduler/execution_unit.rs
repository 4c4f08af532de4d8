//! Scheduling context abstraction.

use alloc::sync::Arc;

use crate::scheduler::resumable::Resumable;

/// Scheduling context capable of deferring work.
pub trait ExecutionUnit: Send + Sync {
  /// Queues `task` for execution after the current slice.
  fn exec_later(&self, task: Arc<dyn Resumable>);
}
