//! Remote proxy lifecycle notifications.

use crate::{actor_id::ActorId, actor_prim::ExitReason, node_id::NodeId};

/// Lifecycle transitions of remote proxies, mirrored on the event stream so
/// local observers can track the reachable cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteLifecycleEvent {
  /// A proxy was interned for a remote actor.
  ProxyCreated {
    /// Node hosting the remote actor.
    node:     NodeId,
    /// Remote actor id.
    actor_id: ActorId,
  },
  /// A proxy was terminated with the given reason.
  ProxyKilled {
    /// Node hosting the remote actor.
    node:     NodeId,
    /// Remote actor id.
    actor_id: ActorId,
    /// Exit reason handed to the proxy.
    reason:   ExitReason,
  },
  /// Every proxy of a node was dropped and its state removed.
  NodeErased {
    /// The node that became unreachable.
    node: NodeId,
  },
}
