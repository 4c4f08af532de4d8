//! Proxy construction callback.

use alloc::sync::Arc;

use proxima_actor_core_rs::{ActorId, ActorSystem, NodeId, StrongActorRef};

/// Callable minting a proxy actor bound to `(node, actor id, parent)`.
///
/// The registry may invoke the factory speculatively and drop the result on
/// loss of an interning race, so factories must have no externally visible
/// side effects beyond allocating the actor object; actors they produce
/// should stay off the scheduler until their first message. Returning `None`
/// declines the request and is surfaced to the caller without being cached.
pub type ProxyFactory =
  Arc<dyn Fn(&ActorSystem, &NodeId, ActorId, Option<StrongActorRef>) -> Option<StrongActorRef> + Send + Sync>;
