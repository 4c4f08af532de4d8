//! Backlink bookkeeping for supervision.

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use spin::Mutex;

use crate::actor_prim::{StrongActorRef, WeakActorRef};

/// Set of actors holding a link back to the owner.
///
/// Membership is pointer identity. Entries are weak so the set never keeps a
/// peer alive; dead entries are pruned on access.
pub struct LinkSet {
  links: Mutex<Vec<WeakActorRef>>,
}

impl LinkSet {
  /// Creates an empty set.
  #[must_use]
  pub const fn new() -> Self {
    Self { links: Mutex::new(Vec::new()) }
  }

  /// Inserts `other`; returns `true` when the set changed.
  pub fn add(&self, other: &StrongActorRef) -> bool {
    let mut links = self.links.lock();
    if links.iter().any(|link| link.points_to(other)) {
      return false;
    }
    links.push(other.downgrade());
    true
  }

  /// Removes `other`; returns `true` when the set changed.
  pub fn remove(&self, other: &StrongActorRef) -> bool {
    let mut links = self.links.lock();
    let before = links.len();
    links.retain(|link| !link.points_to(other));
    links.len() != before
  }

  /// Removes the entry named by an exit notification's source address.
  ///
  /// Returns `false` when the source is already gone; its entry is pruned
  /// with the other dead links on the next snapshot.
  pub fn remove_weak(&self, source: &WeakActorRef) -> bool {
    match source.upgrade() {
      | Some(strong) => self.remove(&strong),
      | None => false,
    }
  }

  /// Returns the live links, pruning entries whose actor was dropped.
  #[must_use]
  pub fn snapshot(&self) -> Vec<StrongActorRef> {
    let mut links = self.links.lock();
    let mut live = Vec::with_capacity(links.len());
    links.retain(|link| match link.upgrade() {
      | Some(strong) => {
        live.push(strong);
        true
      },
      | None => false,
    });
    live
  }

  /// Drops every link.
  pub fn clear(&self) {
    self.links.lock().clear();
  }

  /// Returns the number of recorded links, dead entries included.
  #[must_use]
  pub fn len(&self) -> usize {
    self.links.lock().len()
  }

  /// Indicates whether no links are recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for LinkSet {
  fn default() -> Self {
    Self::new()
  }
}
