//! Owning handle to an actor object.


use alloc::sync::Arc;
use core::{fmt, ops::Deref};

use crate::actor_prim::{abstract_actor::AbstractActor, weak_actor_ref::WeakActorRef};

/// Reference-counted owning handle to an actor object.
///
/// Dropping the last strong handle runs the actor's destructor. Equality is
/// pointer identity: two handles compare equal exactly when they name the
/// same actor object.
#[derive(Clone)]
pub struct StrongActorRef {
  inner: Arc<dyn AbstractActor>,
}

impl StrongActorRef {
  /// Allocates a new actor object and returns its first handle.
  #[must_use]
  pub fn new<A: AbstractActor>(actor: A) -> Self {
    Self { inner: Arc::new(actor) }
  }

  /// Wraps an already shared actor object.
  #[must_use]
  pub fn from_arc(inner: Arc<dyn AbstractActor>) -> Self {
    Self { inner }
  }

  /// Attempts to view the underlying actor as a concrete type.
  #[must_use]
  pub fn downcast_ref<A: AbstractActor>(&self) -> Option<&A> {
    self.inner.as_any().downcast_ref::<A>()
  }

  /// Creates a non-owning handle to the same actor object.
  #[must_use]
  pub fn downgrade(&self) -> WeakActorRef {
    WeakActorRef::new(Arc::downgrade(&self.inner))
  }

  /// Indicates whether both handles point at the same actor object.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  /// Returns the number of strong handles alive for this actor object.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.inner)
  }
}

impl Deref for StrongActorRef {
  type Target = dyn AbstractActor;

  fn deref(&self) -> &Self::Target {
    &*self.inner
  }
}

impl PartialEq for StrongActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl Eq for StrongActorRef {}

impl fmt::Debug for StrongActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StrongActorRef")
      .field("node", self.inner.node())
      .field("id", &self.inner.id())
      .finish()
  }
}
