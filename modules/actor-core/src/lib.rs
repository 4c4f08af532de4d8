#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![cfg_attr(not(test), no_std)]

//! Core actor runtime surface for the proxima remoting workspace.
//!
//! Provides the identity and handle model, the single-consumer inbox, the
//! cooperative scheduler, supervision primitives, and the system facade that
//! the remoting layer builds on. Everything here is `no_std` with `alloc`;
//! runtimes only need to drive the [`scheduler::Coordinator`] to make
//! progress.

extern crate alloc;

mod actor_id;
mod actor_prim;
mod config;
mod dead_letter;
mod event_stream;
mod logging;
mod mailbox;
mod messaging;
mod node_id;
mod scheduler;
mod serialization;
mod supervision;
mod system;

pub use actor_id::ActorId;
pub use actor_prim::{AbstractActor, ExitReason, StrongActorRef, WeakActorRef};
pub use config::ActorSystemConfig;
pub use dead_letter::{DeadLetterEntry, DeadLetterReason};
pub use event_stream::{EventStream, EventStreamEvent, EventStreamSubscriber, RemoteLifecycleEvent};
pub use logging::{LogEvent, LogLevel};
pub use mailbox::{Inbox, InboxPushOutcome, RoundOutcome, TaskOutcome};
pub use messaging::{BouncedRequest, ExitMsg, MailboxRecord, Message, MessageId};
pub use node_id::NodeId;
pub use scheduler::{Coordinator, ExecutionUnit, Resumable, ResumeResult};
pub use serialization::{SerializationError, bincode_codec};
pub use supervision::{LinkSet, SyncRequestBouncer};
pub use system::{ActorSystem, LocalActorRegistry};
