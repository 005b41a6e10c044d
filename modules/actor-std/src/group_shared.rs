use std::{
  sync::atomic::{AtomicBool, Ordering},
  time::{Duration, Instant},
};

use strand_actor_core_rs::SchedulerId;

use crate::{SchedulerGroupConfig, scheduler_queues::SchedulerQueues};

/// State shared by a group, its contexts and its worker threads.
pub(crate) struct GroupShared {
  schedulers:     Vec<SchedulerQueues>,
  stop_requested: AtomicBool,
  origin:         Instant,
}

impl GroupShared {
  pub(crate) fn new(config: &SchedulerGroupConfig) -> Self {
    let schedulers = config
      .schedulers()
      .iter()
      .zip(0..=SchedulerId::MAX)
      .map(|(scheduler, id)| SchedulerQueues::new(SchedulerId::new(id), scheduler.cpu_threads()))
      .collect();
    Self { schedulers, stop_requested: AtomicBool::new(false), origin: Instant::now() }
  }

  pub(crate) fn queues(&self, id: SchedulerId) -> Option<&SchedulerQueues> {
    if !id.is_valid() {
      return None;
    }
    self.schedulers.get(id.index())
  }

  pub(crate) fn schedulers(&self) -> &[SchedulerQueues] {
    &self.schedulers
  }

  pub(crate) fn now(&self) -> Duration {
    self.origin.elapsed()
  }

  pub(crate) fn is_stop_requested(&self) -> bool {
    self.stop_requested.load(Ordering::Acquire)
  }

  /// Returns `true` for the call that actually requested the stop.
  pub(crate) fn request_stop(&self) -> bool {
    self.stop_requested.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
  }
}
