//! Log records published on the event stream.

use alloc::string::String;

use crate::logging::log_level::LogLevel;

/// A single log record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
  level:   LogLevel,
  message: String,
}

impl LogEvent {
  /// Creates a new record.
  #[must_use]
  pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
    Self { level, message: message.into() }
  }

  /// Returns the severity.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Returns the message text.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}
