//! Unit of mail delivered to an actor.

use alloc::vec::Vec;

use crate::{
  actor_prim::StrongActorRef,
  messaging::{message::Message, message_id::MessageId},
};

/// A single mailbox entry: sender, correlation id, forwarding stages, and the
/// payload itself.
#[derive(Clone, Debug)]
pub struct MailboxRecord {
  sender:     Option<StrongActorRef>,
  message_id: MessageId,
  stages:     Vec<StrongActorRef>,
  content:    Message,
}

impl MailboxRecord {
  /// Creates a fully specified record.
  #[must_use]
  pub const fn new(
    sender: Option<StrongActorRef>,
    message_id: MessageId,
    stages: Vec<StrongActorRef>,
    content: Message,
  ) -> Self {
    Self { sender, message_id, stages, content }
  }

  /// Creates an anonymous asynchronous record around `content`.
  #[must_use]
  pub const fn of(content: Message) -> Self {
    Self { sender: None, message_id: MessageId::of(0), stages: Vec::new(), content }
  }

  /// Returns the sending actor, if one was recorded.
  #[must_use]
  pub const fn sender(&self) -> Option<&StrongActorRef> {
    self.sender.as_ref()
  }

  /// Returns the correlation id.
  #[must_use]
  pub const fn message_id(&self) -> MessageId {
    self.message_id
  }

  /// Returns the forwarding stages still ahead of this record.
  #[must_use]
  pub fn stages(&self) -> &[StrongActorRef] {
    &self.stages
  }

  /// Returns the payload.
  #[must_use]
  pub const fn content(&self) -> &Message {
    &self.content
  }

  /// Decomposes the record into its parts.
  #[must_use]
  pub fn into_parts(self) -> (Option<StrongActorRef>, MessageId, Vec<StrongActorRef>, Message) {
    (self.sender, self.message_id, self.stages, self.content)
  }
}
