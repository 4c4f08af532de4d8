//! Rejects synchronous requests aimed at terminated actors.

use alloc::vec::Vec;

use crate::{
  actor_prim::{ExitReason, StrongActorRef},
  messaging::{BouncedRequest, MailboxRecord, Message, MessageId},
};

/// Answers the synchronous requests of a closed mailbox with the owner's
/// exit reason so pending reply futures resolve as failures.
///
/// Asynchronous records are ignored; their loss is reported through dead
/// letters by the caller.
#[derive(Clone, Copy, Debug)]
pub struct SyncRequestBouncer {
  reason: ExitReason,
}

impl SyncRequestBouncer {
  /// Creates a bouncer reporting the given exit reason.
  #[must_use]
  pub const fn new(reason: ExitReason) -> Self {
    Self { reason }
  }

  /// Returns the reported exit reason.
  #[must_use]
  pub const fn reason(&self) -> ExitReason {
    self.reason
  }

  /// Bounces a single request back to `sender`.
  pub fn bounce(&self, sender: Option<&StrongActorRef>, message_id: MessageId) {
    if !message_id.is_request() {
      return;
    }
    let Some(sender) = sender else {
      return;
    };
    let reply = MailboxRecord::new(
      None,
      message_id,
      Vec::new(),
      Message::opaque(BouncedRequest::new(message_id, self.reason)),
    );
    sender.enqueue(reply, None);
  }

  /// Applies queue-closed semantics to a drained record.
  pub fn apply(&self, record: &MailboxRecord) {
    self.bounce(record.sender(), record.message_id());
  }
}
