//! Errors returned by [`SchedulerGroup`](crate::SchedulerGroup) operations.

use core::fmt;

use strand_actor_core_rs::SchedulerId;

/// Failure of a scheduler group operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulerError {
  /// The id is invalid or names no scheduler of the group.
  UnknownScheduler(SchedulerId),
  /// [`start`](crate::SchedulerGroup::start) was already called.
  AlreadyStarted,
  /// A worker thread could not be spawned.
  SpawnFailed {
    /// Name of the thread that failed to start.
    thread: String,
    /// Rendered OS error.
    reason: String,
  },
  /// The group is stopping and accepts no more work.
  Stopped,
}

impl fmt::Display for SchedulerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::UnknownScheduler(id) => write!(f, "unknown scheduler {id}"),
      | Self::AlreadyStarted => f.write_str("scheduler group already started"),
      | Self::SpawnFailed { thread, reason } => write!(f, "failed to spawn thread '{thread}': {reason}"),
      | Self::Stopped => f.write_str("scheduler group stopped"),
    }
  }
}

impl std::error::Error for SchedulerError {}
