//! Actor-address codec.
//!
//! Whenever a serializer encounters an actor handle, only its
//! `(node, actor id)` pair goes on the wire. The write side registers local
//! actors so the remote side can reach back; the read side lives on
//! [`crate::ProxyRegistry`] and interns proxies for unseen remote actors.


mod payload_frame;
mod wire_address;

pub use payload_frame::PayloadFrame;
pub use wire_address::WireAddress;

use alloc::vec::Vec;

use proxima_actor_core_rs::{ActorSystem, Message, SerializationError, StrongActorRef, bincode_codec};

/// Returns the wire address of a handle.
///
/// Handles naming a local actor are additionally registered in the system's
/// local actor table so inbound traffic can resolve them later.
pub fn write_address(system: &ActorSystem, handle: &StrongActorRef) -> WireAddress {
  if handle.node() == system.node_id() {
    system.local_actors().put(handle.clone());
  }
  WireAddress::new(handle.node().clone(), handle.id())
}

/// Encodes the `(stages, content)` pair shipped behind a wire header.
///
/// # Errors
///
/// Returns [`SerializationError::NotSerializable`] for local-only payloads
/// and [`SerializationError::EncodingFailed`] when encoding fails.
pub fn encode_payload(
  system: &ActorSystem,
  stages: &[StrongActorRef],
  content: &Message,
) -> Result<Vec<u8>, SerializationError> {
  let stages = stages.iter().map(|stage| write_address(system, stage)).collect();
  let frame = PayloadFrame::new(stages, content.manifest(), content.to_bytes()?);
  bincode_codec::encode(&frame)
}
