//! Event stream subscriber contract.

use crate::event_stream::event::EventStreamEvent;

/// Receives every event published on the stream.
pub trait EventStreamSubscriber: Send + Sync {
  /// Called for each published event.
  fn on_event(&self, event: &EventStreamEvent);
}
