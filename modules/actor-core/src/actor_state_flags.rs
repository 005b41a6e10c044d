//! Packed per-actor state word.


use core::fmt;

use crate::{SchedulerId, Signals};

const SCHEDULER_MASK: u32 = 0xFF;
const SHARED_FLAG: u32 = 1 << 9;
const LOCK_FLAG: u32 = 1 << 10;
const MIGRATE_FLAG: u32 = 1 << 11;
const PAUSE_FLAG: u32 = 1 << 12;
const CLOSED_FLAG: u32 = 1 << 13;
const IN_QUEUE_FLAG: u32 = 1 << 14;
// Signal kinds start at 1, so kind `k` lands on bit `14 + k` (bits 15..=23).
const SIGNAL_OFFSET: u32 = 14;
const SIGNAL_MASK: u32 = Signals::from_raw(u32::MAX).raw() << SIGNAL_OFFSET;

/// Snapshot of an actor's state word.
///
/// This is a plain value: setters only change the caller's copy. Changes become
/// visible once the locker commits them with a compare-and-swap against the
/// [`ActorState`](crate::ActorState) word.
///
/// | bits  | field        |
/// |-------|--------------|
/// | 0-7   | scheduler id |
/// | 9     | shared       |
/// | 10    | locked       |
/// | 11    | migrate      |
/// | 12    | pause        |
/// | 13    | closed       |
/// | 14    | in queue     |
/// | 15-23 | signals      |
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActorStateFlags {
  raw: u32,
}

impl ActorStateFlags {
  /// Creates a zeroed word: scheduler 0, unshared, unlocked, no signals.
  #[must_use]
  pub const fn new() -> Self {
    Self { raw: 0 }
  }

  /// Rebuilds flags from a raw word.
  #[must_use]
  pub const fn from_raw(raw: u32) -> Self {
    Self { raw }
  }

  /// Returns the raw word.
  #[must_use]
  pub const fn raw(&self) -> u32 {
    self.raw
  }

  /// Returns the owning scheduler.
  #[must_use]
  pub const fn scheduler_id(&self) -> SchedulerId {
    SchedulerId::from_raw((self.raw & SCHEDULER_MASK) as u8)
  }

  /// Sets the owning scheduler.
  pub const fn set_scheduler_id(&mut self, id: SchedulerId) {
    self.raw = (self.raw & !SCHEDULER_MASK) | id.to_raw() as u32;
  }

  /// Returns `true` when any scheduler thread may lock the actor.
  #[must_use]
  pub const fn is_shared(&self) -> bool {
    self.check_flag(SHARED_FLAG)
  }

  /// Sets the shared classification. Fixed once the actor is registered.
  pub const fn set_shared(&mut self, shared: bool) {
    self.set_flag(SHARED_FLAG, shared);
  }

  /// Returns `true` while some thread is processing the actor.
  #[must_use]
  pub const fn is_locked(&self) -> bool {
    self.check_flag(LOCK_FLAG)
  }

  /// Sets the lock bit.
  pub const fn set_locked(&mut self, locked: bool) {
    self.set_flag(LOCK_FLAG, locked);
  }

  /// Returns `true` while the actor moves between schedulers.
  #[must_use]
  pub const fn is_migrate(&self) -> bool {
    self.check_flag(MIGRATE_FLAG)
  }

  /// Sets the migrate bit.
  pub const fn set_migrate(&mut self, migrate: bool) {
    self.set_flag(MIGRATE_FLAG, migrate);
  }

  /// Returns `true` while message delivery is deferred.
  #[must_use]
  pub const fn is_pause(&self) -> bool {
    self.check_flag(PAUSE_FLAG)
  }

  /// Sets the pause bit.
  pub const fn set_pause(&mut self, pause: bool) {
    self.set_flag(PAUSE_FLAG, pause);
  }

  /// Returns `true` once the actor has torn down.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    self.check_flag(CLOSED_FLAG)
  }

  /// Sets the closed bit.
  pub const fn set_closed(&mut self, closed: bool) {
    self.set_flag(CLOSED_FLAG, closed);
  }

  /// Returns `true` while the actor waits in a run queue.
  #[must_use]
  pub const fn is_in_queue(&self) -> bool {
    self.check_flag(IN_QUEUE_FLAG)
  }

  /// Sets the in-queue bit.
  pub const fn set_in_queue(&mut self, in_queue: bool) {
    self.set_flag(IN_QUEUE_FLAG, in_queue);
  }

  /// Returns `true` when any signal bit is set.
  #[must_use]
  pub const fn has_signals(&self) -> bool {
    self.check_flag(SIGNAL_MASK)
  }

  /// Extracts the pending signals.
  #[must_use]
  pub const fn signals(&self) -> Signals {
    Signals::from_raw((self.raw & SIGNAL_MASK) >> SIGNAL_OFFSET)
  }

  /// Replaces the pending signals.
  pub const fn set_signals(&mut self, signals: Signals) {
    self.raw = (self.raw & !SIGNAL_MASK) | (signals.raw() << SIGNAL_OFFSET);
  }

  /// Merges `signals` into the pending signals.
  pub const fn add_signals(&mut self, signals: Signals) {
    self.raw |= signals.raw() << SIGNAL_OFFSET;
  }

  /// Drops every pending signal.
  pub const fn clear_signals(&mut self) {
    self.set_flag(SIGNAL_MASK, false);
  }

  const fn check_flag(&self, mask: u32) -> bool {
    self.raw & mask != 0
  }

  const fn set_flag(&mut self, mask: u32, flag: bool) {
    if flag {
      self.raw |= mask;
    } else {
      self.raw &= !mask;
    }
  }
}

impl fmt::Debug for ActorStateFlags {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorStateFlags")
      .field("scheduler_id", &self.scheduler_id())
      .field("shared", &self.is_shared())
      .field("locked", &self.is_locked())
      .field("migrate", &self.is_migrate())
      .field("pause", &self.is_pause())
      .field("closed", &self.is_closed())
      .field("in_queue", &self.is_in_queue())
      .field("signals", &self.signals())
      .finish()
  }
}
