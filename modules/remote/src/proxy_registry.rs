//! Node-sharded interning table for remote-actor proxies.


mod node_state;
mod proxy_factory;

pub use node_state::NodeState;
pub use proxy_factory::ProxyFactory;

use alloc::vec::Vec;

use hashbrown::HashMap;
use proxima_actor_core_rs::{
  ActorId, ActorSystem, EventStreamEvent, ExitReason, NodeId, RemoteLifecycleEvent, SerializationError,
  StrongActorRef, bincode_codec,
};
use spin::{Once, RwLock};

use crate::codec::{self, WireAddress};

/// Groups proxy instances by node id, guaranteeing at most one proxy per
/// `(node, actor id)` pair under concurrent access.
///
/// A single reader/writer lock protects the table. `get_or_put` looks up
/// under the shared lock, builds a speculative proxy outside any lock, and
/// re-checks after acquiring the exclusive lock; the first inserter wins and
/// a loser's speculative proxy is dropped on the spot.
pub struct ProxyRegistry {
  system:  ActorSystem,
  nodes:   RwLock<HashMap<NodeId, NodeState>>,
  factory: Once<ProxyFactory>,
}

impl ProxyRegistry {
  /// Creates an empty registry bound to `system`.
  #[must_use]
  pub fn new(system: ActorSystem) -> Self {
    Self { system, nodes: RwLock::new(HashMap::new()), factory: Once::new() }
  }

  /// Returns the hosting actor system.
  #[must_use]
  pub const fn system(&self) -> &ActorSystem {
    &self.system
  }

  /// Installs the proxy factory.
  ///
  /// Must run before any concurrent access; later calls are ignored. Until
  /// then the registry behaves as if the factory returned nothing.
  pub fn init(&self, factory: ProxyFactory) {
    self.factory.call_once(|| factory);
  }

  /// Returns the number of proxies interned for `node`.
  #[must_use]
  pub fn count_proxies(&self, node: &NodeId) -> usize {
    self.nodes.read().get(node).map_or(0, |state| state.proxies().len())
  }

  /// Returns the proxy interned for `(node, aid)`; never creates one.
  #[must_use]
  pub fn get(&self, node: &NodeId, aid: ActorId) -> Option<StrongActorRef> {
    self.nodes.read().get(node).and_then(|state| state.proxies().get(&aid).cloned())
  }

  /// Returns the proxy interned for `(node, aid)`, minting one through the
  /// factory if none exists.
  ///
  /// Returns `None` only while no factory is installed or the factory
  /// declines; a declined lookup is never cached.
  pub fn get_or_put(&self, node: &NodeId, aid: ActorId) -> Option<StrongActorRef> {
    let parent = {
      let nodes = self.nodes.read();
      match nodes.get(node) {
        | Some(state) => {
          if let Some(existing) = state.proxies().get(&aid) {
            return Some(existing.clone());
          }
          state.endpoint().cloned()
        },
        | None => None,
      }
    };
    // Speculative: a concurrent caller may win the insert below, in which
    // case this proxy is dropped and terminates unused.
    let speculative = self.make_proxy(node, aid, parent)?;
    {
      let mut nodes = self.nodes.write();
      let state = nodes.entry(node.clone()).or_default();
      if let Some(existing) = state.proxies().get(&aid) {
        return Some(existing.clone());
      }
      state.proxies_mut().insert(aid, speculative.clone());
    }
    self.system.event_stream().publish(&EventStreamEvent::RemoteLifecycle(RemoteLifecycleEvent::ProxyCreated {
      node: node.clone(),
      actor_id: aid,
    }));
    Some(speculative)
  }

  /// Returns a snapshot of every proxy interned for `node`.
  #[must_use]
  pub fn get_all(&self, node: &NodeId) -> Vec<StrongActorRef> {
    self.nodes.read().get(node).map_or_else(Vec::new, |state| state.proxies().values().cloned().collect())
  }

  /// Records `endpoint` as the broker for `node`, creating the node state
  /// if absent. Future proxies for `node` receive `endpoint` as their
  /// construction-time parent.
  ///
  /// Returns the proxies that already existed so the caller can rewire them.
  pub fn claim(&self, node: &NodeId, endpoint: StrongActorRef) -> Vec<StrongActorRef> {
    let mut nodes = self.nodes.write();
    let state = nodes.entry(node.clone()).or_default();
    state.set_endpoint(Some(endpoint));
    state.proxies().values().cloned().collect()
  }

  /// Kills and removes every proxy for `node`, then drops its state.
  pub fn erase(&self, node: &NodeId) {
    let removed = {
      let mut nodes = self.nodes.write();
      let Some(state) = nodes.remove(node) else {
        return;
      };
      for proxy in state.proxies().values() {
        Self::kill_proxy(proxy, ExitReason::RemoteLinkUnreachable);
      }
      state
    };
    drop(removed);
    self.publish_node_erased(node);
  }

  /// Kills and removes the proxy for `(node, aid)`; the node state goes
  /// with it when this was its last proxy.
  pub fn erase_proxy(&self, node: &NodeId, aid: ActorId, reason: ExitReason) {
    let state_removed = {
      let mut nodes = self.nodes.write();
      let Some(state) = nodes.get_mut(node) else {
        return;
      };
      let Some(proxy) = state.proxies_mut().remove(&aid) else {
        return;
      };
      Self::kill_proxy(&proxy, reason);
      if state.proxies().is_empty() {
        nodes.remove(node);
        true
      } else {
        false
      }
    };
    if state_removed {
      self.publish_node_erased(node);
    }
  }

  /// Indicates whether no node state is held.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.nodes.read().is_empty()
  }

  /// Kills every proxy across every node and empties the table.
  pub fn clear(&self) {
    let mut nodes = self.nodes.write();
    for state in nodes.values() {
      for proxy in state.proxies().values() {
        Self::kill_proxy(proxy, ExitReason::RemoteLinkUnreachable);
      }
    }
    nodes.clear();
  }

  /// Writes the address of `handle` to `sink`, registering local actors for
  /// later reachability.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError::EncodingFailed`] when encoding fails.
  pub fn serialize_handle(&self, sink: &mut Vec<u8>, handle: &StrongActorRef) -> Result<(), SerializationError> {
    let address = codec::write_address(&self.system, handle);
    sink.extend_from_slice(&bincode_codec::encode(&address)?);
    Ok(())
  }

  /// Reads an actor address from `source`, interning a proxy on the fly
  /// when it names an unseen remote actor.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError::DecodingFailed`] when the buffer does
  /// not hold a wire address.
  pub fn deserialize_handle(&self, source: &[u8]) -> Result<Option<StrongActorRef>, SerializationError> {
    let address: WireAddress = bincode_codec::decode(source)?;
    Ok(self.resolve(&address))
  }

  /// Resolves a decoded wire address against the local actor table or the
  /// proxy table.
  #[must_use]
  pub fn resolve(&self, address: &WireAddress) -> Option<StrongActorRef> {
    if address.node() == self.system.node_id() {
      self.system.local_actors().get(address.actor_id())
    } else {
      self.get_or_put(address.node(), address.actor_id())
    }
  }

  fn make_proxy(&self, node: &NodeId, aid: ActorId, parent: Option<StrongActorRef>) -> Option<StrongActorRef> {
    let factory = self.factory.get()?;
    factory.as_ref()(&self.system, node, aid, parent)
  }

  // Runs while the exclusive lock is held; the hook must not re-enter the
  // registry. The registry's own handle dies with the map entry.
  fn kill_proxy(proxy: &StrongActorRef, reason: ExitReason) {
    proxy.kill_proxy(None, reason);
  }

  fn publish_node_erased(&self, node: &NodeId) {
    self.system.event_stream().publish(&EventStreamEvent::RemoteLifecycle(RemoteLifecycleEvent::NodeErased {
      node: node.clone(),
    }));
  }
}

impl Drop for ProxyRegistry {
  fn drop(&mut self) {
    self.clear();
  }
}
