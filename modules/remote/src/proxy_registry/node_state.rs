//! Per-node registry state.

use hashbrown::HashMap;
use proxima_actor_core_rs::{ActorId, StrongActorRef};

/// State kept per connected node: the broker endpoint and the interned
/// proxies.
///
/// A node state without proxies is legal (a node may be claimed before any
/// proxy exists) and is removed once its last proxy is erased.
#[derive(Default)]
pub struct NodeState {
  endpoint: Option<StrongActorRef>,
  proxies:  HashMap<ActorId, StrongActorRef>,
}

impl NodeState {
  /// Returns the broker responsible for traffic to this node.
  #[must_use]
  pub const fn endpoint(&self) -> Option<&StrongActorRef> {
    self.endpoint.as_ref()
  }

  /// Returns the proxies interned for this node.
  #[must_use]
  pub const fn proxies(&self) -> &HashMap<ActorId, StrongActorRef> {
    &self.proxies
  }

  pub(crate) fn set_endpoint(&mut self, endpoint: Option<StrongActorRef>) {
    self.endpoint = endpoint;
  }

  pub(crate) fn proxies_mut(&mut self) -> &mut HashMap<ActorId, StrongActorRef> {
    &mut self.proxies
  }
}
