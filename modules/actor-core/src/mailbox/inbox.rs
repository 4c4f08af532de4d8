//! Single-consumer inbox feeding a cooperatively scheduled actor.


use alloc::{collections::VecDeque, vec::Vec};

use spin::Mutex;

use crate::{
  mailbox::{
    push_outcome::InboxPushOutcome,
    round_outcome::{RoundOutcome, TaskOutcome},
  },
  messaging::MailboxRecord,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReaderState {
  /// No reader scheduled; the next push must wake one.
  Blocked,
  /// A reader is scheduled or currently draining the queue.
  Open,
  /// The inbox no longer accepts mail.
  Closed,
}

struct InboxState {
  reader: ReaderState,
  queue:  VecDeque<MailboxRecord>,
}

/// Multi-producer, single-consumer mailbox with deficit-round-robin dequeue
/// over one priority class.
///
/// Fresh inboxes start blocked so the first push reports
/// [`InboxPushOutcome::UnblockedReader`] and the owner gets scheduled.
pub struct Inbox {
  state: Mutex<InboxState>,
}

impl Inbox {
  /// Creates an empty, blocked inbox.
  #[must_use]
  pub const fn new() -> Self {
    Self { state: Mutex::new(InboxState { reader: ReaderState::Blocked, queue: VecDeque::new() }) }
  }

  /// Pushes a record, reporting whether the reader must be scheduled.
  ///
  /// Closed inboxes drop the record; callers needing bounce semantics must
  /// capture the sender and correlation id beforehand.
  pub fn push(&self, record: MailboxRecord) -> InboxPushOutcome {
    let mut state = self.state.lock();
    match state.reader {
      | ReaderState::Closed => InboxPushOutcome::Closed,
      | ReaderState::Blocked => {
        state.queue.push_back(record);
        state.reader = ReaderState::Open;
        InboxPushOutcome::UnblockedReader
      },
      | ReaderState::Open => {
        state.queue.push_back(record);
        InboxPushOutcome::Success
      },
    }
  }

  /// Runs one deficit-round-robin round, feeding up to `quantum` records to
  /// the visitor.
  ///
  /// The inbox lock is not held while the visitor runs.
  pub fn new_round(&self, quantum: usize, mut visitor: impl FnMut(MailboxRecord) -> TaskOutcome) -> RoundOutcome {
    let mut consumed = 0;
    let mut stopped = false;
    while consumed < quantum {
      let record = self.state.lock().queue.pop_front();
      let Some(record) = record else {
        break;
      };
      consumed += 1;
      if visitor(record) == TaskOutcome::StopAll {
        stopped = true;
        break;
      }
    }
    RoundOutcome::new(consumed, stopped)
  }

  /// Attempts to block the reader; fails when mail is pending or the inbox
  /// has been closed.
  pub fn try_block(&self) -> bool {
    let mut state = self.state.lock();
    if state.reader != ReaderState::Open || !state.queue.is_empty() {
      return false;
    }
    state.reader = ReaderState::Blocked;
    true
  }

  /// Closes the inbox and returns the drained backlog so the caller can
  /// apply queue-closed semantics to each record.
  pub fn close(&self) -> Vec<MailboxRecord> {
    let mut state = self.state.lock();
    state.reader = ReaderState::Closed;
    state.queue.drain(..).collect()
  }

  /// Indicates whether the inbox has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state.lock().reader == ReaderState::Closed
  }

  /// Returns the number of records awaiting consumption.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.lock().queue.len()
  }

  /// Indicates whether no records are pending.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for Inbox {
  fn default() -> Self {
    Self::new()
  }
}
