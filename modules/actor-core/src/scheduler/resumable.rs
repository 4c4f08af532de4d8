//! Cooperative work units.

use crate::scheduler::execution_unit::ExecutionUnit;

/// Verdict returned by [`Resumable::resume`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeResult {
  /// The task blocked on an empty mailbox; the scheduler drops its
  /// reference until the next enqueue wakes the task again.
  AwaitingMessage,
  /// The task exhausted its throughput budget with work still pending.
  ResumeLater,
  /// The task finished for good.
  Done,
}

/// A unit of cooperatively scheduled work.
///
/// Implementations run to their throughput budget and yield; suspension
/// happens only at mailbox boundaries.
pub trait Resumable: Send + Sync + 'static {
  /// Processes up to `max_throughput` records and reports how to proceed.
  fn resume(&self, ctx: &dyn ExecutionUnit, max_throughput: usize) -> ResumeResult;
}
