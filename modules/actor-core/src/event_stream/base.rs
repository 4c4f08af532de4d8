//! Fan-out event stream.


use alloc::{sync::Arc, vec::Vec};

use spin::RwLock;

use crate::event_stream::{event::EventStreamEvent, subscriber::EventStreamSubscriber};

/// Fans published events out to every registered subscriber.
///
/// Publication happens on the publisher's thread; subscribers must not
/// block.
pub struct EventStream {
  subscribers: RwLock<Vec<Arc<dyn EventStreamSubscriber>>>,
}

impl EventStream {
  /// Creates a stream with no subscribers.
  #[must_use]
  pub const fn new() -> Self {
    Self { subscribers: RwLock::new(Vec::new()) }
  }

  /// Registers a subscriber.
  pub fn subscribe(&self, subscriber: Arc<dyn EventStreamSubscriber>) {
    self.subscribers.write().push(subscriber);
  }

  /// Publishes an event to every subscriber.
  pub fn publish(&self, event: &EventStreamEvent) {
    for subscriber in self.subscribers.read().iter() {
      subscriber.on_event(event);
    }
  }

  /// Returns the number of registered subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.subscribers.read().len()
  }
}

impl Default for EventStream {
  fn default() -> Self {
    Self::new()
  }
}
