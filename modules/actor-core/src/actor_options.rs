//! Creation options for actors.

use alloc::string::String;

use crate::SchedulerId;

/// Describes where and how a new actor runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorOptions {
  name:         String,
  scheduler_id: SchedulerId,
  is_shared:    bool,
}

impl ActorOptions {
  /// Creates options for an unnamed shared actor without a fixed scheduler.
  #[must_use]
  pub const fn new() -> Self {
    Self { name: String::new(), scheduler_id: SchedulerId::invalid(), is_shared: true }
  }

  /// Sets the diagnostic name.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  /// Binds the actor to `scheduler_id`.
  #[must_use]
  pub const fn on_scheduler(mut self, scheduler_id: SchedulerId) -> Self {
    self.scheduler_id = scheduler_id;
    self
  }

  /// Pins the actor to its scheduler's owner thread instead of the shared pool.
  #[must_use]
  pub const fn pinned(mut self) -> Self {
    self.is_shared = false;
    self
  }

  /// Returns the diagnostic name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the scheduler binding, invalid when none was chosen.
  #[must_use]
  pub const fn scheduler_id(&self) -> SchedulerId {
    self.scheduler_id
  }

  /// Returns `true` when a scheduler was chosen.
  #[must_use]
  pub const fn has_scheduler(&self) -> bool {
    self.scheduler_id.is_valid()
  }

  /// Returns `true` for shared actors.
  #[must_use]
  pub const fn is_shared(&self) -> bool {
    self.is_shared
  }
}

impl Default for ActorOptions {
  fn default() -> Self {
    Self::new()
  }
}
