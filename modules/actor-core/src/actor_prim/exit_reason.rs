//! Exit reasons reported when an actor terminates.

use core::fmt;

/// Describes why an actor terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
  /// The actor finished without error.
  Normal,
  /// The link to the actor's remote node became unreachable.
  RemoteLinkUnreachable,
}

impl ExitReason {
  /// Indicates whether the reason reports a failure.
  #[must_use]
  pub const fn is_failure(&self) -> bool {
    matches!(self, Self::RemoteLinkUnreachable)
  }
}

impl fmt::Display for ExitReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Normal => write!(f, "normal"),
      | Self::RemoteLinkUnreachable => write!(f, "remote link unreachable"),
    }
  }
}
