//! Park/unpark helper for idle CPU workers.


use std::sync::{Condvar, Mutex, PoisonError};

/// Epoch-based waiter that never loses a wake-up.
///
/// A worker takes a ticket with [`prepare`](Self::prepare), re-checks its queue, and
/// only then [`wait`](Self::wait)s. Any notification issued after the ticket was
/// taken bumps the epoch, so the wait returns immediately.
pub(crate) struct WorkerWaiter {
  epoch:   Mutex<u64>,
  condvar: Condvar,
}

impl WorkerWaiter {
  pub(crate) const fn new() -> Self {
    Self { epoch: Mutex::new(0), condvar: Condvar::new() }
  }

  pub(crate) fn prepare(&self) -> u64 {
    *self.epoch.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub(crate) fn wait(&self, ticket: u64) {
    let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
    while *epoch == ticket {
      epoch = self.condvar.wait(epoch).unwrap_or_else(PoisonError::into_inner);
    }
  }

  pub(crate) fn notify_one(&self) {
    self.bump();
    self.condvar.notify_one();
  }

  pub(crate) fn notify_all(&self) {
    self.bump();
    self.condvar.notify_all();
  }

  fn bump(&self) {
    let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
    *epoch = epoch.wrapping_add(1);
  }
}
