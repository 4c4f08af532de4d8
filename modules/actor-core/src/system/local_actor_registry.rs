//! Table of local actors reachable from remote nodes.


use hashbrown::HashMap;
use spin::RwLock;

use crate::{actor_id::ActorId, actor_prim::StrongActorRef};

/// Interns local actors by id so inbound traffic can address them.
///
/// The write side of the actor-address codec registers every serialized
/// local actor here; the read side resolves local ids against it.
pub struct LocalActorRegistry {
  entries: RwLock<HashMap<ActorId, StrongActorRef>>,
}

impl LocalActorRegistry {
  /// Creates an empty table.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: RwLock::new(HashMap::new()) }
  }

  /// Registers `actor` under its id; an existing entry is replaced.
  pub fn put(&self, actor: StrongActorRef) {
    self.entries.write().insert(actor.id(), actor);
  }

  /// Returns the actor registered under `id`.
  #[must_use]
  pub fn get(&self, id: ActorId) -> Option<StrongActorRef> {
    self.entries.read().get(&id).cloned()
  }

  /// Removes and returns the actor registered under `id`.
  pub fn erase(&self, id: ActorId) -> Option<StrongActorRef> {
    self.entries.write().remove(&id)
  }

  /// Returns the number of registered actors.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  /// Indicates whether no actors are registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for LocalActorRegistry {
  fn default() -> Self {
    Self::new()
  }
}
