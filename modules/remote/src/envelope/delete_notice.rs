//! Proxy teardown housekeeping.

use proxima_actor_core_rs::{ActorId, NodeId};
use serde::{Deserialize, Serialize};

/// Best-effort notification a destroyed proxy leaves with its last-known
/// broker; loss is acceptable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNotice {
  node:     NodeId,
  actor_id: ActorId,
}

impl DeleteNotice {
  /// Creates a new notice.
  #[must_use]
  pub const fn new(node: NodeId, actor_id: ActorId) -> Self {
    Self { node, actor_id }
  }

  /// Returns the node of the vanished proxy.
  #[must_use]
  pub const fn node(&self) -> &NodeId {
    &self.node
  }

  /// Returns the actor id of the vanished proxy.
  #[must_use]
  pub const fn actor_id(&self) -> ActorId {
    self.actor_id
  }
}
