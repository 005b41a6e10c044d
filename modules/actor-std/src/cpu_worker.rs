use std::thread;

use strand_actor_core_rs::ExecutorOptions;
use tracing::debug;

use crate::{LOG_TARGET, SchedulerContext};

/// Shared-pool worker: pops actors and runs them until the group stops.
pub(crate) struct CpuWorker {
  context:    SchedulerContext,
  index:      usize,
  spin_limit: usize,
}

impl CpuWorker {
  pub(crate) const fn new(context: SchedulerContext, index: usize, spin_limit: usize) -> Self {
    Self { context, index, spin_limit }
  }

  pub(crate) fn run(self) {
    let queues = self.context.queues();
    let options = ExecutorOptions::new().with_from_queue(true);
    debug!(target: LOG_TARGET, scheduler = %self.context.id(), worker = self.index, "cpu worker started");

    let mut idle = 0;
    while !self.context.is_stop_requested() {
      if let Some(actor) = queues.pop_shared() {
        actor.execute(&self.context, options);
        idle = 0;
        continue;
      }
      if idle < self.spin_limit {
        idle += 1;
        thread::yield_now();
        continue;
      }
      let ticket = queues.cpu_waiter().prepare();
      if queues.has_shared() || self.context.is_stop_requested() {
        continue;
      }
      queues.cpu_waiter().wait(ticket);
      idle = 0;
    }

    debug!(target: LOG_TARGET, scheduler = %self.context.id(), worker = self.index, "cpu worker stopped");
  }
}
