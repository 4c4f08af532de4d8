//! Framed record header.


use proxima_actor_core_rs::{ActorId, NodeId};
use serde::{Deserialize, Serialize};

use crate::basp::message_kind::MessageKind;

/// Header preceding every BASP payload.
///
/// `source_actor_id` and `dest_actor_id` carry [`ActorId::ABSENT`] when no
/// actor is addressed on the respective side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireHeader {
  kind:            MessageKind,
  source_node:     NodeId,
  dest_node:       NodeId,
  source_actor_id: ActorId,
  dest_actor_id:   ActorId,
  operation_id:    u64,
  payload_len:     u32,
}

impl WireHeader {
  /// Creates a fully specified header.
  #[must_use]
  #[allow(clippy::too_many_arguments)]
  pub const fn new(
    kind: MessageKind,
    source_node: NodeId,
    dest_node: NodeId,
    source_actor_id: ActorId,
    dest_actor_id: ActorId,
    operation_id: u64,
    payload_len: u32,
  ) -> Self {
    Self { kind, source_node, dest_node, source_actor_id, dest_actor_id, operation_id, payload_len }
  }

  /// Returns the operation code.
  #[must_use]
  pub const fn kind(&self) -> MessageKind {
    self.kind
  }

  /// Returns the originating node.
  #[must_use]
  pub const fn source_node(&self) -> &NodeId {
    &self.source_node
  }

  /// Returns the destination node.
  #[must_use]
  pub const fn dest_node(&self) -> &NodeId {
    &self.dest_node
  }

  /// Returns the originating actor id.
  #[must_use]
  pub const fn source_actor_id(&self) -> ActorId {
    self.source_actor_id
  }

  /// Returns the destination actor id.
  #[must_use]
  pub const fn dest_actor_id(&self) -> ActorId {
    self.dest_actor_id
  }

  /// Returns the 64-bit correlation id.
  #[must_use]
  pub const fn operation_id(&self) -> u64 {
    self.operation_id
  }

  /// Returns the length in bytes of the payload that follows.
  #[must_use]
  pub const fn payload_len(&self) -> u32 {
    self.payload_len
  }
}
