//! Cluster-unique node identity.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a runtime instance participating in the cluster.
///
/// Combines a numeric tag with a byte-string fingerprint; the pair is unique
/// across the cluster and stable for the lifetime of the node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
  tag:         u32,
  fingerprint: Vec<u8>,
}

impl NodeId {
  /// Creates a new identity from its components.
  #[must_use]
  pub fn new(tag: u32, fingerprint: impl Into<Vec<u8>>) -> Self {
    Self { tag, fingerprint: fingerprint.into() }
  }

  /// Returns the numeric tag.
  #[must_use]
  pub const fn tag(&self) -> u32 {
    self.tag
  }

  /// Returns the fingerprint bytes.
  #[must_use]
  pub fn fingerprint(&self) -> &[u8] {
    &self.fingerprint
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}#", self.tag)?;
    for byte in &self.fingerprint {
      write!(f, "{byte:02x}")?;
    }
    Ok(())
  }
}
