//! Per-scheduler settings.

use std::{num::NonZeroUsize, thread};

/// Settings of one scheduler of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
  cpu_threads: usize,
}

impl SchedulerConfig {
  /// Creates a scheduler with `cpu_threads` shared-pool workers.
  ///
  /// Zero is allowed: shared actors then run on the owner thread.
  #[must_use]
  pub const fn new(cpu_threads: usize) -> Self {
    Self { cpu_threads }
  }

  /// Replaces the number of shared-pool workers.
  #[must_use]
  pub const fn with_cpu_threads(mut self, cpu_threads: usize) -> Self {
    self.cpu_threads = cpu_threads;
    self
  }

  /// Returns the number of shared-pool workers.
  #[must_use]
  pub const fn cpu_threads(&self) -> usize {
    self.cpu_threads
  }
}

impl Default for SchedulerConfig {
  fn default() -> Self {
    Self::new(thread::available_parallelism().map_or(1, NonZeroUsize::get))
  }
}
