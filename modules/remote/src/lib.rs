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

//! Remoting facilities for the proxima actor runtime.
//!
//! Actors on one node reach actors on other nodes through local proxies that
//! serialize every message into a framed wire record and hand it to a
//! per-node broker. The [`ProxyRegistry`] interns exactly one proxy per
//! `(node, actor id)` pair; [`BaspProxy`] is the actor-shaped object behind
//! each entry.

extern crate alloc;

mod basp;
mod codec;
mod envelope;
mod proxy_registry;

pub use basp::{BaspProxy, MessageKind, WireHeader, WireRecord, basp_proxy_factory};
pub use codec::{PayloadFrame, WireAddress, encode_payload, write_address};
pub use envelope::{DeleteNotice, ForwardEnvelope, LinkNotice, LinkOp};
pub use proxy_registry::{NodeState, ProxyFactory, ProxyRegistry};
