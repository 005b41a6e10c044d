//! Options of a single executor pass.

use crate::ActorLockerOptions;

/// Describes who drives an [`ActorExecutor`](crate::ActorExecutor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutorOptions {
  from_queue: bool,
  has_poll:   bool,
}

impl ExecutorOptions {
  /// Options of a plain sender.
  #[must_use]
  pub const fn new() -> Self {
    Self { from_queue: false, has_poll: false }
  }

  /// Marks a pass started by a worker that just popped the actor from a run queue.
  #[must_use]
  pub const fn with_from_queue(mut self, from_queue: bool) -> Self {
    self.from_queue = from_queue;
    self
  }

  /// Marks a pass on an owner thread, which runs pinned actors.
  #[must_use]
  pub const fn with_has_poll(mut self, has_poll: bool) -> Self {
    self.has_poll = has_poll;
    self
  }

  /// Returns `true` when the actor was popped from a run queue.
  #[must_use]
  pub const fn from_queue(&self) -> bool {
    self.from_queue
  }

  /// Returns `true` on an owner thread.
  #[must_use]
  pub const fn has_poll(&self) -> bool {
    self.has_poll
  }

  pub(crate) const fn locker_options(&self) -> ActorLockerOptions {
    ActorLockerOptions::new().with_can_execute_paused(self.from_queue).with_is_shared(!self.has_poll)
  }
}
