//! Administrative forwarding envelope.

use alloc::vec::Vec;

use proxima_actor_core_rs::{Message, MessageId, StrongActorRef};

/// Envelope a proxy hands its broker for link, unlink, and exit
/// propagation; ordinary messages travel pre-serialized instead.
#[derive(Clone, Debug)]
pub struct ForwardEnvelope {
  sender:     Option<StrongActorRef>,
  stages:     Vec<StrongActorRef>,
  proxy:      StrongActorRef,
  message_id: MessageId,
  content:    Message,
}

impl ForwardEnvelope {
  /// Creates a new envelope.
  #[must_use]
  pub const fn new(
    sender: Option<StrongActorRef>,
    stages: Vec<StrongActorRef>,
    proxy: StrongActorRef,
    message_id: MessageId,
    content: Message,
  ) -> Self {
    Self { sender, stages, proxy, message_id, content }
  }

  /// Returns the original sender, if any.
  #[must_use]
  pub const fn sender(&self) -> Option<&StrongActorRef> {
    self.sender.as_ref()
  }

  /// Returns the forwarding stages.
  #[must_use]
  pub fn stages(&self) -> &[StrongActorRef] {
    &self.stages
  }

  /// Returns the proxy that forwarded the message.
  #[must_use]
  pub const fn proxy(&self) -> &StrongActorRef {
    &self.proxy
  }

  /// Returns the correlation id.
  #[must_use]
  pub const fn message_id(&self) -> MessageId {
    self.message_id
  }

  /// Returns the forwarded payload.
  #[must_use]
  pub const fn content(&self) -> &Message {
    &self.content
  }
}
