//! Type-erased actor view used by run queues.

use alloc::sync::Arc;

use crate::{ActorState, ExecutorOptions, SchedulerDispatcher, Signals};

/// Shared handle to a scheduled actor.
pub type ActorHandle = Arc<dyn ScheduledActor>;

/// Operations a scheduler performs on actors without knowing their type.
pub trait ScheduledActor: Send + Sync {
  /// Runs one executor pass over the actor.
  fn execute(self: Arc<Self>, dispatcher: &dyn SchedulerDispatcher, options: ExecutorOptions);

  /// Delivers `signals`, running them inline when the actor can be executed here.
  fn send_signals(self: Arc<Self>, dispatcher: &dyn SchedulerDispatcher, signals: Signals, options: ExecutorOptions);

  /// Returns the actor's state word.
  fn state(&self) -> &ActorState;

  /// Returns the diagnostic name.
  fn name(&self) -> &str;
}
