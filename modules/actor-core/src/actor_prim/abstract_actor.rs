//! Dynamic actor surface shared by native actors and remote proxies.

use core::any::Any;

use crate::{
  actor_id::ActorId,
  actor_prim::{exit_reason::ExitReason, strong_actor_ref::StrongActorRef},
  messaging::MailboxRecord,
  node_id::NodeId,
  scheduler::ExecutionUnit,
};

/// Minimal dynamic interface every actor object implements.
///
/// Remote proxies implement every hook; native actors may leave the link and
/// kill hooks at their defaults.
pub trait AbstractActor: Send + Sync + 'static {
  /// Returns the node hosting this actor.
  fn node(&self) -> &NodeId;

  /// Returns the node-local actor id.
  fn id(&self) -> ActorId;

  /// Delivers a mailbox record, scheduling the actor on `ctx` when it was
  /// idle. Without a context the system's default scheduler is used.
  fn enqueue(&self, record: MailboxRecord, ctx: Option<&dyn ExecutionUnit>);

  /// Registers a link back from `other`; returns `true` when the link set
  /// changed.
  fn add_backlink(&self, other: &StrongActorRef) -> bool {
    let _ = other;
    false
  }

  /// Removes a link back from `other`; returns `true` when the link set
  /// changed.
  fn remove_backlink(&self, other: &StrongActorRef) -> bool {
    let _ = other;
    false
  }

  /// Terminates a proxy object, handing it the exit reason its pending
  /// synchronous requests are answered with. Native actors ignore the call.
  fn kill_proxy(&self, ctx: Option<&dyn ExecutionUnit>, reason: ExitReason) {
    let _ = (ctx, reason);
  }

  /// Provides access to the concrete type for downcasting.
  fn as_any(&self) -> &(dyn Any + Send + Sync);
}
