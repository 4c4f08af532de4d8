//! Log severities.

use core::fmt;

/// Severity attached to a [`crate::logging::LogEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  /// Diagnostic details.
  Debug,
  /// Routine operational messages.
  Info,
  /// Recoverable anomalies.
  Warn,
  /// Failures requiring attention.
  Error,
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Debug => write!(f, "DEBUG"),
      | Self::Info => write!(f, "INFO"),
      | Self::Warn => write!(f, "WARN"),
      | Self::Error => write!(f, "ERROR"),
    }
  }
}
