//! Actor system construction parameters.

use core::num::NonZeroUsize;

use crate::node_id::NodeId;

/// Configuration consumed by [`crate::system::ActorSystem::new`].
#[derive(Clone, Debug)]
pub struct ActorSystemConfig {
  node_id:    NodeId,
  throughput: NonZeroUsize,
  quantum:    NonZeroUsize,
}

impl ActorSystemConfig {
  /// Default per-slice throughput granted to resumed actors.
  pub const DEFAULT_THROUGHPUT: usize = 300;
  /// Default deficit-round-robin quantum for proxy mailboxes.
  pub const DEFAULT_QUANTUM: usize = 3;

  /// Creates a configuration for the given node identity with default
  /// scheduling parameters.
  #[must_use]
  pub fn new(node_id: NodeId) -> Self {
    Self {
      node_id,
      throughput: NonZeroUsize::new(Self::DEFAULT_THROUGHPUT).unwrap_or(NonZeroUsize::MIN),
      quantum: NonZeroUsize::new(Self::DEFAULT_QUANTUM).unwrap_or(NonZeroUsize::MIN),
    }
  }

  /// Overrides the per-slice throughput budget.
  #[must_use]
  pub const fn with_throughput(mut self, throughput: NonZeroUsize) -> Self {
    self.throughput = throughput;
    self
  }

  /// Overrides the deficit-round-robin quantum.
  #[must_use]
  pub const fn with_quantum(mut self, quantum: NonZeroUsize) -> Self {
    self.quantum = quantum;
    self
  }

  /// Returns the local node identity.
  #[must_use]
  pub const fn node_id(&self) -> &NodeId {
    &self.node_id
  }

  /// Returns the per-slice throughput budget in records.
  #[must_use]
  pub const fn throughput(&self) -> usize {
    self.throughput.get()
  }

  /// Returns the deficit-round-robin quantum in records.
  #[must_use]
  pub const fn quantum(&self) -> usize {
    self.quantum.get()
  }
}
