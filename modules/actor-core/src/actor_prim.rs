//! Actor primitives package.
//!
//! Contains the dynamic actor surface and the reference-counted handle model.

mod abstract_actor;
mod exit_reason;
mod strong_actor_ref;
mod weak_actor_ref;

pub use abstract_actor::AbstractActor;
pub use exit_reason::ExitReason;
pub use strong_actor_ref::StrongActorRef;
pub use weak_actor_ref::WeakActorRef;
