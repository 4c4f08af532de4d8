//! Message correlation identifiers.

#[cfg(test)]
mod tests;

use core::fmt;

use serde::{Deserialize, Serialize};

const REQUEST_FLAG: u64 = 1 << 63;

/// 64-bit correlation id distinguishing synchronous requests from plain
/// sends.
///
/// The top bit marks a synchronous request; closed mailboxes answer those
/// with a failure instead of discarding them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(u64);

impl MessageId {
  /// Creates an id for an asynchronous send.
  #[must_use]
  pub const fn of(value: u64) -> Self {
    Self(value & !REQUEST_FLAG)
  }

  /// Creates an id carrying the request flag.
  #[must_use]
  pub const fn request(value: u64) -> Self {
    Self(value | REQUEST_FLAG)
  }

  /// Indicates whether the id belongs to a synchronous request.
  #[must_use]
  pub const fn is_request(&self) -> bool {
    self.0 & REQUEST_FLAG != 0
  }

  /// Returns the raw 64-bit value carried on the wire.
  #[must_use]
  pub const fn integer_value(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for MessageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:#x}", self.0)
  }
}
