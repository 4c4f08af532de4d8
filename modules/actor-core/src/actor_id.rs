//! Node-local actor identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an actor within a single node.
///
/// The value `0` is reserved as the wire sentinel for "no actor".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
  /// Sentinel emitted on the wire when no actor is addressed.
  pub const ABSENT: Self = Self(0);

  /// Creates an identifier from its numeric value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the numeric value.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.0
  }

  /// Indicates whether this is the absent sentinel.
  #[must_use]
  pub const fn is_absent(&self) -> bool {
    self.0 == 0
  }
}

impl fmt::Display for ActorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
