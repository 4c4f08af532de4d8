//! FIFO coordinator driving resumable tasks.


use alloc::{collections::VecDeque, sync::Arc};

use spin::Mutex;

use crate::scheduler::{
  execution_unit::ExecutionUnit,
  resumable::{Resumable, ResumeResult},
};

/// Deterministic FIFO scheduler.
///
/// Serves as the runtime's default execution unit and, because slices run
/// only when the caller drives them, as the deterministic driver used by
/// tests.
pub struct Coordinator {
  queue:          Mutex<VecDeque<Arc<dyn Resumable>>>,
  max_throughput: usize,
}

impl Coordinator {
  /// Creates a coordinator granting each slice the given throughput budget.
  #[must_use]
  pub const fn new(max_throughput: usize) -> Self {
    Self { queue: Mutex::new(VecDeque::new()), max_throughput }
  }

  /// Queues a task for execution.
  pub fn enqueue(&self, task: Arc<dyn Resumable>) {
    self.queue.lock().push_back(task);
  }

  /// Runs a single task slice; returns `false` when the queue was empty.
  ///
  /// Tasks reporting [`ResumeResult::ResumeLater`] are placed at the back of
  /// the queue; blocked and finished tasks release their reference.
  pub fn run_once(&self) -> bool {
    let task = self.queue.lock().pop_front();
    let Some(task) = task else {
      return false;
    };
    if task.resume(self, self.max_throughput) == ResumeResult::ResumeLater {
      self.queue.lock().push_back(task);
    }
    true
  }

  /// Drains the run queue, returning the number of slices executed.
  pub fn run(&self) -> usize {
    let mut slices = 0;
    while self.run_once() {
      slices += 1;
    }
    slices
  }

  /// Returns the number of queued tasks.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.queue.lock().len()
  }
}

impl ExecutionUnit for Coordinator {
  fn exec_later(&self, task: Arc<dyn Resumable>) {
    self.enqueue(task);
  }
}
