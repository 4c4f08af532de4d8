//! Undeliverable message records.

use crate::{
  actor_prim::WeakActorRef,
  dead_letter::dead_letter_reason::DeadLetterReason,
  messaging::MessageId,
};

/// Describes one undeliverable message.
///
/// The payload itself is not retained; the entry records provenance only.
#[derive(Clone, Debug)]
pub struct DeadLetterEntry {
  sender:     Option<WeakActorRef>,
  message_id: MessageId,
  reason:     DeadLetterReason,
}

impl DeadLetterEntry {
  /// Creates a new entry.
  #[must_use]
  pub const fn new(sender: Option<WeakActorRef>, message_id: MessageId, reason: DeadLetterReason) -> Self {
    Self { sender, message_id, reason }
  }

  /// Returns the original sender, if it was recorded.
  #[must_use]
  pub const fn sender(&self) -> Option<&WeakActorRef> {
    self.sender.as_ref()
  }

  /// Returns the correlation id of the lost message.
  #[must_use]
  pub const fn message_id(&self) -> MessageId {
    self.message_id
  }

  /// Returns why the message was dropped.
  #[must_use]
  pub const fn reason(&self) -> DeadLetterReason {
    self.reason
  }
}
