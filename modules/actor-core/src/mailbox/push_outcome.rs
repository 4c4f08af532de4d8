//! Outcomes reported by inbox push attempts.

/// Outcome of pushing a record into an [`crate::mailbox::Inbox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InboxPushOutcome {
  /// The inbox was idle; the caller must schedule the reader.
  UnblockedReader,
  /// The reader was already scheduled; nothing else to do.
  Success,
  /// The inbox is closed; the record was rejected.
  Closed,
}
