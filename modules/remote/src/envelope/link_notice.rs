//! Link graph maintenance notifications.

use proxima_actor_core_rs::StrongActorRef;

/// Direction of a link change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOp {
  /// A link was established.
  Link,
  /// A link was removed.
  Unlink,
}

/// Notifies the remote side of a link change so it can mirror the local
/// link graph.
#[derive(Clone, Debug)]
pub struct LinkNotice {
  op:     LinkOp,
  target: StrongActorRef,
}

impl LinkNotice {
  /// Creates a new notification.
  #[must_use]
  pub const fn new(op: LinkOp, target: StrongActorRef) -> Self {
    Self { op, target }
  }

  /// Returns the direction of the change.
  #[must_use]
  pub const fn op(&self) -> LinkOp {
    self.op
  }

  /// Returns the linked actor.
  #[must_use]
  pub const fn target(&self) -> &StrongActorRef {
    &self.target
  }
}
