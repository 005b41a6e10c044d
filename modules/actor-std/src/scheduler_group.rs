//! A set of schedulers and the threads that drive them.


use std::{
  sync::Arc,
  thread::{self, JoinHandle},
};

use strand_actor_core_rs::{Actor, ActorOptions, ActorRef, SchedulerId};
use tracing::{debug, warn};

use crate::{
  ConfigError, LOG_TARGET, SchedulerContext, SchedulerError, SchedulerGroupConfig, cpu_worker::CpuWorker,
  group_shared::GroupShared, owner_worker::OwnerWorker,
};

/// Owns the schedulers of a runtime.
///
/// Each scheduler gets its configured number of CPU workers serving shared actors
/// and one owner thread serving pinned actors and alarms. Dropping the group stops
/// and joins it.
pub struct SchedulerGroup {
  config:  SchedulerGroupConfig,
  shared:  Arc<GroupShared>,
  threads: Vec<JoinHandle<()>>,
  started: bool,
}

impl SchedulerGroup {
  /// Builds an idle group from `config`.
  ///
  /// # Errors
  ///
  /// Returns the [`ConfigError`] reported by [`SchedulerGroupConfig::validate`].
  pub fn new(config: SchedulerGroupConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let shared = Arc::new(GroupShared::new(&config));
    Ok(Self { config, shared, threads: Vec::new(), started: false })
  }

  /// Spawns every worker thread.
  ///
  /// # Errors
  ///
  /// Returns [`SchedulerError::AlreadyStarted`] on a second call,
  /// [`SchedulerError::Stopped`] after [`stop`](Self::stop), and
  /// [`SchedulerError::SpawnFailed`] when the OS refuses a thread; in that case the
  /// threads already spawned are stopped and joined.
  pub fn start(&mut self) -> Result<(), SchedulerError> {
    if self.started {
      return Err(SchedulerError::AlreadyStarted);
    }
    if self.shared.is_stop_requested() {
      return Err(SchedulerError::Stopped);
    }
    self.started = true;

    if let Err(error) = self.spawn_workers() {
      self.stop();
      self.join();
      return Err(error);
    }
    debug!(target: LOG_TARGET, schedulers = self.scheduler_count(), threads = self.threads.len(), "scheduler group started");
    Ok(())
  }

  /// Returns the number of schedulers.
  #[must_use]
  pub fn scheduler_count(&self) -> usize {
    self.shared.schedulers().len()
  }

  /// Returns the dispatcher of scheduler `id`.
  ///
  /// # Errors
  ///
  /// Returns [`SchedulerError::UnknownScheduler`] when `id` names no scheduler.
  pub fn dispatcher(&self, id: SchedulerId) -> Result<SchedulerContext, SchedulerError> {
    match self.shared.queues(id) {
      | Some(_) => Ok(SchedulerContext::new(id, self.shared.clone())),
      | None => Err(SchedulerError::UnknownScheduler(id)),
    }
  }

  /// Registers `actor` on scheduler `id` and queues its start-up.
  ///
  /// # Errors
  ///
  /// Returns [`SchedulerError::UnknownScheduler`] for a bad id and
  /// [`SchedulerError::Stopped`] once the group is stopping.
  pub fn create_actor<A: Actor>(
    &self,
    id: SchedulerId,
    actor: A,
    options: ActorOptions,
  ) -> Result<ActorRef<A>, SchedulerError> {
    let context = self.dispatcher(id)?;
    if context.is_stop_requested() {
      return Err(SchedulerError::Stopped);
    }
    Ok(ActorRef::spawn(&context, actor, options.on_scheduler(id)))
  }

  /// Asks every worker to exit; returns `true` for the call that did it.
  pub fn stop(&self) -> bool {
    if !self.shared.request_stop() {
      warn!(target: LOG_TARGET, "scheduler group stop requested twice");
      return false;
    }
    debug!(target: LOG_TARGET, "scheduler group stop requested");
    for queues in self.shared.schedulers() {
      queues.wake_all();
    }
    true
  }

  /// Returns `true` once [`stop`](Self::stop) was called.
  #[must_use]
  pub fn is_stop_requested(&self) -> bool {
    self.shared.is_stop_requested()
  }

  /// Waits for every worker to exit, then drops work left in the queues.
  ///
  /// Returns the number of discarded queue entries. Call [`stop`](Self::stop)
  /// first, or this blocks for as long as the group runs.
  pub fn join(&mut self) -> usize {
    for handle in self.threads.drain(..) {
      if handle.join().is_err() {
        warn!(target: LOG_TARGET, "scheduler worker panicked");
      }
    }
    let dropped: usize = self.shared.schedulers().iter().map(|queues| queues.drain()).sum();
    if dropped > 0 {
      warn!(target: LOG_TARGET, dropped, "discarded queued actors at shutdown");
    }
    dropped
  }

  fn spawn_workers(&mut self) -> Result<(), SchedulerError> {
    let prefix = self.config.thread_name_prefix().to_owned();
    for (index, scheduler) in self.config.schedulers().iter().enumerate() {
      let context = SchedulerContext::new(self.shared.schedulers()[index].id(), self.shared.clone());
      let id = context.id();
      for worker in 0..scheduler.cpu_threads() {
        let cpu = CpuWorker::new(context.clone(), worker, self.config.spin_limit());
        let handle = spawn(format!("{prefix}-{id}-cpu-{worker}"), move || cpu.run())?;
        self.threads.push(handle);
      }
      let owner = OwnerWorker::new(context.for_owner(), self.config.owner_idle_timeout());
      let handle = spawn(format!("{prefix}-{id}-owner"), move || owner.run())?;
      self.threads.push(handle);
    }
    Ok(())
  }
}

fn spawn<F>(name: String, body: F) -> Result<JoinHandle<()>, SchedulerError>
where
  F: FnOnce() + Send + 'static, {
  thread::Builder::new()
    .name(name.clone())
    .spawn(body)
    .map_err(|error| SchedulerError::SpawnFailed { thread: name, reason: error.to_string() })
}

impl Drop for SchedulerGroup {
  fn drop(&mut self) {
    if !self.shared.is_stop_requested() {
      self.stop();
    }
    self.join();
  }
}

impl core::fmt::Debug for SchedulerGroup {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SchedulerGroup")
      .field("schedulers", &self.scheduler_count())
      .field("threads", &self.threads.len())
      .field("started", &self.started)
      .finish()
  }
}
