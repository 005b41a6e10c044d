//! Options that shape what an [`ActorLocker`](crate::ActorLocker) may execute.

/// Execution expectations of a locker.
///
/// A locker serves either the shared pool or a scheduler's pinned actors, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorLockerOptions {
  can_execute_paused: bool,
  is_shared:          bool,
}

impl ActorLockerOptions {
  /// Creates options for the shared pool that refuse paused actors.
  #[must_use]
  pub const fn new() -> Self {
    Self { can_execute_paused: false, is_shared: true }
  }

  /// Allows executing paused actors, as a queue worker does after popping one.
  #[must_use]
  pub const fn with_can_execute_paused(mut self, can_execute_paused: bool) -> Self {
    self.can_execute_paused = can_execute_paused;
    self
  }

  /// Selects the shared pool (`true`) or pinned actors (`false`).
  #[must_use]
  pub const fn with_is_shared(mut self, is_shared: bool) -> Self {
    self.is_shared = is_shared;
    self
  }

  /// Returns `true` when paused actors may run.
  #[must_use]
  pub const fn can_execute_paused(&self) -> bool {
    self.can_execute_paused
  }

  /// Returns `true` when the locker serves shared actors.
  #[must_use]
  pub const fn is_shared(&self) -> bool {
    self.is_shared
  }
}

impl Default for ActorLockerOptions {
  fn default() -> Self {
    Self::new()
  }
}
