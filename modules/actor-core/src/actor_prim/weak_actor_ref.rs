//! Non-owning handle to an actor object.

use alloc::sync::Weak;
use core::fmt;

use crate::actor_prim::{abstract_actor::AbstractActor, strong_actor_ref::StrongActorRef};

/// Non-owning counterpart of [`StrongActorRef`].
///
/// Keeps the actor object reachable for identity comparisons without
/// extending its lifetime.
#[derive(Clone)]
pub struct WeakActorRef {
  inner: Weak<dyn AbstractActor>,
}

impl WeakActorRef {
  pub(crate) fn new(inner: Weak<dyn AbstractActor>) -> Self {
    Self { inner }
  }

  /// Attempts to recover an owning handle; fails once the actor was dropped.
  #[must_use]
  pub fn upgrade(&self) -> Option<StrongActorRef> {
    self.inner.upgrade().map(StrongActorRef::from_arc)
  }

  /// Indicates whether this handle names the same actor object as `other`.
  #[must_use]
  pub fn points_to(&self, other: &StrongActorRef) -> bool {
    match self.upgrade() {
      | Some(strong) => strong.ptr_eq(other),
      | None => false,
    }
  }
}

impl fmt::Debug for WeakActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WeakActorRef").field("alive", &(self.inner.strong_count() > 0)).finish()
  }
}
