//! Actor system facade shared across the runtime.


use alloc::{string::String, sync::Arc};

use portable_atomic::{AtomicU64, Ordering};

use crate::{
  actor_id::ActorId,
  config::ActorSystemConfig,
  dead_letter::DeadLetterEntry,
  event_stream::{EventStream, EventStreamEvent},
  logging::{LogEvent, LogLevel},
  node_id::NodeId,
  scheduler::Coordinator,
  system::local_actor_registry::LocalActorRegistry,
};

struct ActorSystemState {
  config:       ActorSystemConfig,
  scheduler:    Coordinator,
  event_stream: EventStream,
  local_actors: LocalActorRegistry,
  next_id:      AtomicU64,
}

/// Cheaply clonable handle to the runtime services the remoting layer
/// consumes: node identity, scheduler, event stream, and the local actor
/// table.
#[derive(Clone)]
pub struct ActorSystem {
  inner: Arc<ActorSystemState>,
}

impl ActorSystem {
  /// Builds a system from the provided configuration.
  #[must_use]
  pub fn new(config: ActorSystemConfig) -> Self {
    let scheduler = Coordinator::new(config.throughput());
    Self {
      inner: Arc::new(ActorSystemState {
        config,
        scheduler,
        event_stream: EventStream::new(),
        local_actors: LocalActorRegistry::new(),
        next_id: AtomicU64::new(1),
      }),
    }
  }

  /// Returns the local node identity.
  #[must_use]
  pub fn node_id(&self) -> &NodeId {
    self.inner.config.node_id()
  }

  /// Returns the system configuration.
  #[must_use]
  pub fn config(&self) -> &ActorSystemConfig {
    &self.inner.config
  }

  /// Returns the default scheduler.
  #[must_use]
  pub fn scheduler(&self) -> &Coordinator {
    &self.inner.scheduler
  }

  /// Returns the system event stream.
  #[must_use]
  pub fn event_stream(&self) -> &EventStream {
    &self.inner.event_stream
  }

  /// Returns the table of local actors reachable from remote nodes.
  #[must_use]
  pub fn local_actors(&self) -> &LocalActorRegistry {
    &self.inner.local_actors
  }

  /// Allocates the next node-local actor id.
  pub fn allocate_actor_id(&self) -> ActorId {
    ActorId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed))
  }

  /// Publishes a log record on the event stream.
  pub fn log(&self, level: LogLevel, message: impl Into<String>) {
    self.inner.event_stream.publish(&EventStreamEvent::Log(LogEvent::new(level, message)));
  }

  /// Publishes a dead letter on the event stream.
  pub fn dead_letter(&self, entry: DeadLetterEntry) {
    self.inner.event_stream.publish(&EventStreamEvent::DeadLetter(entry));
  }
}
