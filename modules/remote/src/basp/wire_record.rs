//! Framed wire records.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::basp::wire_header::WireHeader;

/// A header plus its serialized payload, ready for the transport.
///
/// Records of this shape pass through proxies untouched; everything else is
/// serialized into one first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
  header:  WireHeader,
  payload: Vec<u8>,
}

impl WireRecord {
  /// Creates a record from its parts.
  #[must_use]
  pub const fn new(header: WireHeader, payload: Vec<u8>) -> Self {
    Self { header, payload }
  }

  /// Returns the header.
  #[must_use]
  pub const fn header(&self) -> &WireHeader {
    &self.header
  }

  /// Returns the serialized payload.
  #[must_use]
  pub fn payload(&self) -> &[u8] {
    &self.payload
  }

  /// Decomposes the record.
  #[must_use]
  pub fn into_parts(self) -> (WireHeader, Vec<u8>) {
    (self.header, self.payload)
  }
}
