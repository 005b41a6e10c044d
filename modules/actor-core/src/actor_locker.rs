//! Compare-and-swap protocol guarding an actor's state word.

#[cfg(test)]
mod tests;

use crate::{ActorLockerOptions, ActorState, ActorStateFlags, Signals};

/// Per-call helper that acquires, releases, or signals an actor through its
/// [`ActorState`] word.
///
/// Construct one right before use: it snapshots the word at creation and keeps
/// refreshing that snapshot from failed compare-and-swaps. Contention is never an
/// error here; every operation either retries or reports that someone else owns
/// the actor.
///
/// While [`own_lock`](Self::own_lock) is `true` the caller has exclusive access to
/// the actor's private state and must eventually call
/// [`try_unlock`](Self::try_unlock) until it succeeds.
pub struct ActorLocker<'a> {
  state:        &'a ActorState,
  flags:        ActorStateFlags,
  new_flags:    ActorStateFlags,
  own_lock:     bool,
  options:      ActorLockerOptions,
  cas_attempts: u32,
}

impl<'a> ActorLocker<'a> {
  /// Creates a locker for `state` with default options.
  #[must_use]
  pub fn new(state: &'a ActorState) -> Self {
    Self::with_options(state, ActorLockerOptions::new())
  }

  /// Creates a locker for `state`.
  #[must_use]
  pub fn with_options(state: &'a ActorState, options: ActorLockerOptions) -> Self {
    Self {
      state,
      flags: state.flags_relaxed(),
      new_flags: ActorStateFlags::new(),
      own_lock: false,
      options,
      cas_attempts: 0,
    }
  }

  /// Tries to take exclusive ownership of the actor without queuing.
  ///
  /// Returns `false` once the word is locked by someone else, or queued while not
  /// executable by this locker: in both cases merging signals is the only legal move.
  /// On success [`flags`](Self::flags) holds the pre-lock snapshot, including the
  /// signals that were pending; the shared word keeps the lock bit with no signals.
  ///
  /// # Panics
  ///
  /// Panics when the locker already owns the lock.
  pub fn try_lock(&mut self) -> bool {
    assert!(!self.own_lock, "try_lock called while already owning the actor lock");
    while !self.can_try_add_signals() {
      let mut candidate = self.flags;
      candidate.set_locked(true);
      candidate.clear_signals();
      self.new_flags = candidate;
      if self.compare_exchange_snapshot(candidate) {
        self.own_lock = true;
        return true;
      }
    }
    false
  }

  /// Releases ownership, publishing `flags` as the actor's new state.
  ///
  /// Returns `true` on a clean hand-off. Returns `false` when other threads added
  /// signals while the lock was held: those signals are folded into
  /// [`flags`](Self::flags), the lock is kept, and the caller must process them
  /// before unlocking again.
  ///
  /// # Panics
  ///
  /// Panics when the locker does not own the lock or `flags` claims to be locked.
  pub fn try_unlock(&mut self, flags: ActorStateFlags) -> bool {
    assert!(self.own_lock, "try_unlock called without owning the actor lock");
    assert!(!flags.is_locked(), "try_unlock called with locked flags");

    self.flags = flags;
    self.cas_attempts += 1;
    if self.state.compare_exchange(&mut self.new_flags, flags) {
      self.own_lock = false;
      return true;
    }

    // Only signal bits can change under our lock; collect them and stay locked.
    let mut relocked = flags;
    relocked.set_locked(true);
    relocked.clear_signals();
    loop {
      self.flags.add_signals(self.new_flags.signals());
      self.cas_attempts += 1;
      if self.state.compare_exchange(&mut self.new_flags, relocked) {
        break;
      }
    }
    self.new_flags = relocked;
    false
  }

  /// Merges `signals` into a word that this locker may not execute, in one attempt.
  ///
  /// Returns `false` on contention; the snapshot is refreshed and the caller decides
  /// how to retry (usually through [`add_signals`](Self::add_signals)).
  ///
  /// # Panics
  ///
  /// Panics when the locker owns the lock, or when the snapshot shows an actor that
  /// should be locked rather than signalled.
  pub fn try_add_signals(&mut self, signals: Signals) -> bool {
    assert!(!self.own_lock, "try_add_signals called while owning the actor lock");
    assert!(self.can_try_add_signals(), "try_add_signals called on an actor that must be locked instead");
    let mut candidate = self.flags;
    candidate.add_signals(signals);
    self.new_flags = candidate;
    if self.compare_exchange_snapshot(candidate) {
      self.flags = candidate;
      return true;
    }
    false
  }

  /// Delivers `signals` whatever the actor's current state.
  ///
  /// Returns `true` when this call took the lock: the caller is now responsible for
  /// draining the actor and the signals are already part of [`flags`](Self::flags).
  /// Returns `false` when the signals were merged into an actor another thread will
  /// service.
  ///
  /// # Panics
  ///
  /// Panics when the locker already owns the lock.
  pub fn add_signals(&mut self, signals: Signals) -> bool {
    assert!(!self.own_lock, "add_signals called while owning the actor lock");
    loop {
      if self.can_try_add_signals() {
        if self.try_add_signals(signals) {
          return false;
        }
      } else if self.try_lock() {
        self.flags.add_signals(signals);
        return true;
      }
    }
  }

  /// Returns `true` while this locker owns the actor.
  #[must_use]
  pub const fn own_lock(&self) -> bool {
    self.own_lock
  }

  /// Returns the locker's view of the actor's flags.
  #[must_use]
  pub const fn flags(&self) -> ActorStateFlags {
    self.flags
  }

  /// Returns the options the locker was created with.
  #[must_use]
  pub const fn options(&self) -> ActorLockerOptions {
    self.options
  }

  /// Returns the number of compare-and-swap operations issued so far.
  #[must_use]
  pub const fn cas_attempts(&self) -> u32 {
    self.cas_attempts
  }

  /// Returns `true` when the snapshot describes an actor this locker may run.
  #[must_use]
  pub const fn can_execute(&self) -> bool {
    self.flags.is_shared() == self.options.is_shared() && (self.options.can_execute_paused() || !self.flags.is_pause())
  }

  const fn can_try_add_signals(&self) -> bool {
    self.flags.is_locked() || (self.flags.is_in_queue() && !self.can_execute())
  }

  fn compare_exchange_snapshot(&mut self, candidate: ActorStateFlags) -> bool {
    self.cas_attempts += 1;
    self.state.compare_exchange(&mut self.flags, candidate)
  }
}

impl core::fmt::Debug for ActorLocker<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorLocker")
      .field("flags", &self.flags)
      .field("own_lock", &self.own_lock)
      .field("options", &self.options)
      .finish()
  }
}
