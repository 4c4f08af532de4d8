//! Reasons a message became undeliverable.

use core::fmt;

/// Explains why a message turned into a dead letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadLetterReason {
  /// The destination's mailbox had already been closed.
  QueueClosed,
  /// No destination was available for the message.
  NoRecipient,
}

impl fmt::Display for DeadLetterReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::QueueClosed => write!(f, "queue closed"),
      | Self::NoRecipient => write!(f, "no recipient"),
    }
  }
}
