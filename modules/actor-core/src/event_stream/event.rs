//! Events published on the system event stream.

use crate::{
  dead_letter::DeadLetterEntry,
  event_stream::remote_lifecycle_event::RemoteLifecycleEvent,
  logging::LogEvent,
};

/// Union of everything the event stream can carry.
#[derive(Clone, Debug)]
pub enum EventStreamEvent {
  /// Diagnostic log record.
  Log(LogEvent),
  /// A message that could not be delivered.
  DeadLetter(DeadLetterEntry),
  /// Remote proxy lifecycle notification.
  RemoteLifecycle(RemoteLifecycleEvent),
}
