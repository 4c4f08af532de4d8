//! Actor addresses as they appear on the wire.

use proxima_actor_core_rs::{ActorId, NodeId};
use serde::{Deserialize, Serialize};

/// The `(node, actor id)` pair identifying an actor across the cluster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireAddress {
  node:     NodeId,
  actor_id: ActorId,
}

impl WireAddress {
  /// Creates a new address.
  #[must_use]
  pub const fn new(node: NodeId, actor_id: ActorId) -> Self {
    Self { node, actor_id }
  }

  /// Returns the hosting node.
  #[must_use]
  pub const fn node(&self) -> &NodeId {
    &self.node
  }

  /// Returns the node-local actor id.
  #[must_use]
  pub const fn actor_id(&self) -> ActorId {
    self.actor_id
  }
}
