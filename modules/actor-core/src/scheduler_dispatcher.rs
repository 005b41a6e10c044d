//! Seam between actor executors and the run queues that drive them.

use core::time::Duration;

use crate::{ActorHandle, SchedulerId};

/// Run-queue services an executor needs from the scheduler it runs on.
pub trait SchedulerDispatcher: Send + Sync {
  /// Returns the scheduler the calling thread belongs to, or an invalid id for
  /// foreign threads.
  fn scheduler_id(&self) -> SchedulerId;

  /// Returns `true` on the thread that runs this scheduler's pinned actors.
  fn has_poll(&self) -> bool;

  /// Queues `actor` on `scheduler_id` (the current scheduler when invalid).
  ///
  /// `need_poll` routes pinned actors to the scheduler's owner thread; other actors
  /// go to its shared pool.
  fn add_to_queue(&self, actor: ActorHandle, scheduler_id: SchedulerId, need_poll: bool);

  /// Replaces the alarm of `actor`; `None` cancels it.
  fn set_alarm(&self, actor: &ActorHandle, deadline: Option<Duration>);

  /// Returns the current time of the clock alarms are measured on.
  fn now(&self) -> Duration;
}
