//! Envelope package.
//!
//! Contains the administrative payloads observed at the broker boundary.

mod delete_notice;
mod forward_envelope;
mod link_notice;

pub use delete_notice::DeleteNotice;
pub use forward_envelope::ForwardEnvelope;
pub use link_notice::{LinkNotice, LinkOp};
