//! Failure reply for requests aimed at terminated actors.

use crate::{actor_prim::ExitReason, messaging::message_id::MessageId};

/// Answer delivered to the sender of a synchronous request whose destination
/// had already closed its mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BouncedRequest {
  message_id: MessageId,
  reason:     ExitReason,
}

impl BouncedRequest {
  /// Creates a new bounce reply.
  #[must_use]
  pub const fn new(message_id: MessageId, reason: ExitReason) -> Self {
    Self { message_id, reason }
  }

  /// Returns the id of the request being answered.
  #[must_use]
  pub const fn message_id(&self) -> MessageId {
    self.message_id
  }

  /// Returns the exit reason of the terminated destination.
  #[must_use]
  pub const fn reason(&self) -> ExitReason {
    self.reason
  }
}
