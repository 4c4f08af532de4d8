//! Exit notification exchanged between linked actors.

use crate::actor_prim::{ExitReason, WeakActorRef};

/// Notifies linked actors that a peer exited.
#[derive(Clone, Debug)]
pub struct ExitMsg {
  source: WeakActorRef,
  reason: ExitReason,
}

impl ExitMsg {
  /// Creates a new notification.
  #[must_use]
  pub const fn new(source: WeakActorRef, reason: ExitReason) -> Self {
    Self { source, reason }
  }

  /// Returns the exiting actor.
  #[must_use]
  pub const fn source(&self) -> &WeakActorRef {
    &self.source
  }

  /// Returns the exit reason.
  #[must_use]
  pub const fn reason(&self) -> ExitReason {
    self.reason
  }
}
