use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use super::{decode, encode};
use crate::{actor_id::ActorId, node_id::NodeId, serialization::SerializationError};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Frame {
  node:     NodeId,
  actor_id: ActorId,
  label:    String,
}

#[test]
fn values_round_trip() {
  let frame = Frame {
    node:     NodeId::new(1, *b"11111111111111111111"),
    actor_id: ActorId::new(7),
    label:    String::from("dispatch"),
  };
  let bytes = encode(&frame).expect("frame must encode");
  let decoded: Frame = decode(&bytes).expect("frame must decode");
  assert_eq!(decoded, frame);
}

#[test]
fn truncated_buffers_fail_to_decode() {
  let bytes = encode(&ActorId::new(500)).expect("id must encode");
  let result: Result<ActorId, _> = decode(&bytes[..bytes.len() - 1]);
  assert!(matches!(result, Err(SerializationError::DecodingFailed(_))));
}

#[test]
fn fixed_int_encoding_keeps_ids_wide() {
  let bytes = encode(&ActorId::new(1)).expect("id must encode");
  assert_eq!(bytes.len(), 8);

  let empty: Vec<u8> = Vec::new();
  let result: Result<ActorId, _> = decode(&empty);
  assert!(result.is_err());
}
