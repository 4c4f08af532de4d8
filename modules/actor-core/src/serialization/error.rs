//! Serialization failure taxonomy.

use alloc::string::String;
use core::fmt;

/// Describes why a payload could not be put on or taken off the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
  /// The payload type carries no serialized form.
  NotSerializable {
    /// Type manifest of the offending payload.
    manifest: &'static str,
  },
  /// Encoding the payload failed.
  EncodingFailed(String),
  /// Decoding a wire buffer failed.
  DecodingFailed(String),
}

impl fmt::Display for SerializationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NotSerializable { manifest } => write!(f, "payload `{manifest}` has no serialized form"),
      | Self::EncodingFailed(reason) => write!(f, "encoding failed: {reason}"),
      | Self::DecodingFailed(reason) => write!(f, "decoding failed: {reason}"),
    }
  }
}
