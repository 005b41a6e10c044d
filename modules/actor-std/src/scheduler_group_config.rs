//! Settings of a whole scheduler group.

#[cfg(test)]
mod tests;

use core::time::Duration;

use strand_actor_core_rs::SchedulerId;

use crate::{ConfigError, SchedulerConfig};

/// Builder-style configuration of a [`SchedulerGroup`](crate::SchedulerGroup).
///
/// Scheduler `i` of [`schedulers`](Self::schedulers) gets the id `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerGroupConfig {
  schedulers:         Vec<SchedulerConfig>,
  thread_name_prefix: String,
  spin_limit:         usize,
  owner_idle_timeout: Duration,
}

impl SchedulerGroupConfig {
  /// Default number of yields before an idle CPU worker parks.
  pub const DEFAULT_SPIN_LIMIT: usize = 64;
  /// Default longest sleep of an idle owner thread.
  pub const DEFAULT_OWNER_IDLE_TIMEOUT: Duration = Duration::from_millis(100);
  /// Default prefix of worker thread names.
  pub const DEFAULT_THREAD_NAME_PREFIX: &'static str = "strand";

  /// Creates a configuration without schedulers.
  #[must_use]
  pub fn new() -> Self {
    Self {
      schedulers:         Vec::new(),
      thread_name_prefix: String::from(Self::DEFAULT_THREAD_NAME_PREFIX),
      spin_limit:         Self::DEFAULT_SPIN_LIMIT,
      owner_idle_timeout: Self::DEFAULT_OWNER_IDLE_TIMEOUT,
    }
  }

  /// Appends a scheduler.
  #[must_use]
  pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
    self.schedulers.push(scheduler);
    self
  }

  /// Replaces every scheduler.
  #[must_use]
  pub fn with_schedulers(mut self, schedulers: Vec<SchedulerConfig>) -> Self {
    self.schedulers = schedulers;
    self
  }

  /// Sets the prefix of worker thread names.
  #[must_use]
  pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.thread_name_prefix = prefix.into();
    self
  }

  /// Sets how many times an idle CPU worker yields before parking.
  #[must_use]
  pub const fn with_spin_limit(mut self, spin_limit: usize) -> Self {
    self.spin_limit = spin_limit;
    self
  }

  /// Sets the longest sleep of an idle owner thread.
  #[must_use]
  pub const fn with_owner_idle_timeout(mut self, timeout: Duration) -> Self {
    self.owner_idle_timeout = timeout;
    self
  }

  /// Returns the configured schedulers.
  #[must_use]
  pub fn schedulers(&self) -> &[SchedulerConfig] {
    &self.schedulers
  }

  /// Returns the thread name prefix.
  #[must_use]
  pub fn thread_name_prefix(&self) -> &str {
    &self.thread_name_prefix
  }

  /// Returns the idle spin count.
  #[must_use]
  pub const fn spin_limit(&self) -> usize {
    self.spin_limit
  }

  /// Returns the owner idle timeout.
  #[must_use]
  pub const fn owner_idle_timeout(&self) -> Duration {
    self.owner_idle_timeout
  }

  /// Checks that the configuration can back a running group.
  ///
  /// # Errors
  ///
  /// Returns a [`ConfigError`] describing the first invalid setting.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.schedulers.is_empty() {
      return Err(ConfigError::NoSchedulers);
    }
    if self.schedulers.len() > SchedulerId::CAPACITY {
      return Err(ConfigError::TooManySchedulers { requested: self.schedulers.len(), max: SchedulerId::CAPACITY });
    }
    if self.thread_name_prefix.is_empty() {
      return Err(ConfigError::EmptyThreadNamePrefix);
    }
    if self.owner_idle_timeout.is_zero() {
      return Err(ConfigError::ZeroIdleTimeout);
    }
    Ok(())
  }
}

impl Default for SchedulerGroupConfig {
  fn default() -> Self {
    Self::new().with_scheduler(SchedulerConfig::default())
  }
}
