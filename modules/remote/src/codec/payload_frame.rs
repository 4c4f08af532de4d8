//! Payload framing behind a wire header.

use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::codec::wire_address::WireAddress;

/// The serialized `(stages, content)` pair a proxy ships to its broker.
///
/// The content manifest names the payload type so the receiving node can
/// pick a deserializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadFrame {
  stages:   Vec<WireAddress>,
  manifest: String,
  content:  Vec<u8>,
}

impl PayloadFrame {
  /// Creates a new frame.
  #[must_use]
  pub fn new(stages: Vec<WireAddress>, manifest: impl Into<String>, content: Vec<u8>) -> Self {
    Self { stages, manifest: manifest.into(), content }
  }

  /// Returns the forwarding stages.
  #[must_use]
  pub fn stages(&self) -> &[WireAddress] {
    &self.stages
  }

  /// Returns the content manifest.
  #[must_use]
  pub fn manifest(&self) -> &str {
    &self.manifest
  }

  /// Returns the serialized content bytes.
  #[must_use]
  pub fn content(&self) -> &[u8] {
    &self.content
  }
}
