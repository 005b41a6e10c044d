use std::{mem, time::Duration};

use strand_actor_core_rs::{ActorHandle, ExecutorOptions, SchedulerDispatcher, Signal, Signals};
use tracing::{debug, trace};

use crate::{LOG_TARGET, SchedulerContext};

/// Owner thread of a scheduler: fires alarms and runs pinned actors, plus shared
/// actors when the scheduler has no CPU worker.
pub(crate) struct OwnerWorker {
  context:      SchedulerContext,
  idle_timeout: Duration,
}

struct OwnerBatch {
  due:    Vec<ActorHandle>,
  pinned: Vec<ActorHandle>,
  shared: Vec<ActorHandle>,
}

impl OwnerWorker {
  pub(crate) const fn new(context: SchedulerContext, idle_timeout: Duration) -> Self {
    Self { context, idle_timeout }
  }

  pub(crate) fn run(self) {
    let pinned_options = ExecutorOptions::new().with_from_queue(true).with_has_poll(true);
    let shared_options = ExecutorOptions::new().with_from_queue(true);
    let alarm_options = ExecutorOptions::new().with_has_poll(true);
    debug!(target: LOG_TARGET, scheduler = %self.context.id(), "owner worker started");

    while let Some(batch) = self.next_batch() {
      for actor in batch.due {
        trace!(target: LOG_TARGET, actor = actor.name(), "alarm fired");
        actor.send_signals(&self.context, Signals::one(Signal::Alarm), alarm_options);
      }
      for actor in batch.pinned {
        actor.execute(&self.context, pinned_options);
      }
      for actor in batch.shared {
        actor.execute(&self.context, shared_options);
      }
    }

    debug!(target: LOG_TARGET, scheduler = %self.context.id(), "owner worker stopped");
  }

  /// Blocks until there is work or the group stops; `None` means stop.
  fn next_batch(&self) -> Option<OwnerBatch> {
    let queues = self.context.queues();
    let mut state = queues.lock_owner();
    loop {
      if self.context.is_stop_requested() {
        return None;
      }
      let now = self.context.now();
      let due = state.alarms.take_due(now);
      if !due.is_empty() || state.has_work() {
        return Some(OwnerBatch {
          due,
          pinned: mem::take(&mut state.pinned).into(),
          shared: mem::take(&mut state.shared).into(),
        });
      }
      let timeout = state
        .alarms
        .next_deadline()
        .map_or(self.idle_timeout, |deadline| deadline.saturating_sub(now).min(self.idle_timeout));
      state = queues.wait_owner(state, timeout);
    }
  }
}
