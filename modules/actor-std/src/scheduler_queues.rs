//! Run queues and alarms of one scheduler.

use std::{
  sync::{Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use crossbeam_queue::SegQueue;
use strand_actor_core_rs::{ActorHandle, SchedulerId};

use crate::{owner_state::OwnerState, worker_waiter::WorkerWaiter};

/// Queues of a scheduler.
///
/// Shared actors go to a lock-free queue served by the CPU workers, or to the owner
/// thread when the scheduler has no CPU worker. Pinned actors and alarms always go
/// to the owner thread.
pub(crate) struct SchedulerQueues {
  id:           SchedulerId,
  cpu_threads:  usize,
  cpu_queue:    SegQueue<ActorHandle>,
  cpu_waiter:   WorkerWaiter,
  owner:        Mutex<OwnerState>,
  owner_signal: Condvar,
}

impl SchedulerQueues {
  pub(crate) fn new(id: SchedulerId, cpu_threads: usize) -> Self {
    Self {
      id,
      cpu_threads,
      cpu_queue: SegQueue::new(),
      cpu_waiter: WorkerWaiter::new(),
      owner: Mutex::new(OwnerState::new()),
      owner_signal: Condvar::new(),
    }
  }

  pub(crate) const fn id(&self) -> SchedulerId {
    self.id
  }

  pub(crate) fn push_shared(&self, actor: ActorHandle) {
    if self.cpu_threads == 0 {
      self.lock_owner().shared.push_back(actor);
      self.owner_signal.notify_one();
      return;
    }
    self.cpu_queue.push(actor);
    self.cpu_waiter.notify_one();
  }

  pub(crate) fn push_pinned(&self, actor: ActorHandle) {
    self.lock_owner().pinned.push_back(actor);
    self.owner_signal.notify_one();
  }

  pub(crate) fn set_alarm(&self, actor: &ActorHandle, deadline: Option<Duration>) {
    self.lock_owner().alarms.set(actor, deadline);
    self.owner_signal.notify_one();
  }

  pub(crate) fn pop_shared(&self) -> Option<ActorHandle> {
    self.cpu_queue.pop()
  }

  pub(crate) fn has_shared(&self) -> bool {
    !self.cpu_queue.is_empty()
  }

  pub(crate) const fn cpu_waiter(&self) -> &WorkerWaiter {
    &self.cpu_waiter
  }

  pub(crate) fn lock_owner(&self) -> MutexGuard<'_, OwnerState> {
    self.owner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Sleeps on the owner condition variable for at most `timeout`.
  pub(crate) fn wait_owner<'a>(&self, guard: MutexGuard<'a, OwnerState>, timeout: Duration) -> MutexGuard<'a, OwnerState> {
    match self.owner_signal.wait_timeout(guard, timeout) {
      | Ok((guard, _)) => guard,
      | Err(poisoned) => poisoned.into_inner().0,
    }
  }

  /// Wakes every worker of the scheduler.
  pub(crate) fn wake_all(&self) {
    self.cpu_waiter.notify_all();
    let _guard = self.lock_owner();
    self.owner_signal.notify_all();
  }

  /// Drops every queued actor and alarm, returning how many entries were discarded.
  pub(crate) fn drain(&self) -> usize {
    let mut dropped = 0;
    while self.cpu_queue.pop().is_some() {
      dropped += 1;
    }
    let mut owner = self.lock_owner();
    dropped += owner.pinned.len() + owner.shared.len();
    owner.pinned.clear();
    owner.shared.clear();
    dropped + owner.alarms.clear()
  }
}
