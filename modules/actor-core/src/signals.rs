//! Priority-ordered set of pending signals.


use core::fmt;

use crate::{Signal, SignalsIter};

const VALID_MASK: u32 = {
  let mut mask = 0;
  let mut i = 0;
  while i < Signal::ALL.len() {
    mask |= Signal::ALL[i].bit();
    i += 1;
  }
  mask
};

/// Compact set of [`Signal`] kinds, stored as a bitmask indexed by kind.
///
/// The value is local to its owner; it becomes visible to other threads only after
/// being merged into an [`ActorState`](crate::ActorState) word by the locker.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Signals {
  raw: u32,
}

impl Signals {
  /// Creates an empty set.
  #[must_use]
  pub const fn new() -> Self {
    Self { raw: 0 }
  }

  /// Creates a set holding a single signal.
  #[must_use]
  pub const fn one(signal: Signal) -> Self {
    Self { raw: signal.bit() }
  }

  /// Rebuilds a set from its raw bitmask. Bits outside the known kinds are dropped.
  #[must_use]
  pub const fn from_raw(raw: u32) -> Self {
    Self { raw: raw & VALID_MASK }
  }

  /// Returns the raw bitmask.
  #[must_use]
  pub const fn raw(&self) -> u32 {
    self.raw
  }

  /// Returns `true` when no signal is pending.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.raw == 0
  }

  /// Returns `true` when `signal` is pending.
  #[must_use]
  pub const fn has_signal(&self, signal: Signal) -> bool {
    self.raw & signal.bit() != 0
  }

  /// Adds a single signal.
  pub const fn add_signal(&mut self, signal: Signal) {
    self.raw |= signal.bit();
  }

  /// Adds every signal of `other`.
  pub const fn add_signals(&mut self, other: Signals) {
    self.raw |= other.raw;
  }

  /// Removes a single signal.
  pub const fn clear_signal(&mut self, signal: Signal) {
    self.raw &= !signal.bit();
  }

  /// Returns the most urgent pending signal (lowest index), or `None` when empty.
  #[must_use]
  pub const fn first_signal(&self) -> Option<Signal> {
    if self.raw == 0 {
      return None;
    }
    Signal::from_index(self.raw.trailing_zeros())
  }

  /// Iterates the pending signals from most to least urgent.
  #[must_use]
  pub const fn iter(&self) -> SignalsIter {
    SignalsIter::new(*self)
  }
}

impl From<Signal> for Signals {
  fn from(signal: Signal) -> Self {
    Self::one(signal)
  }
}

impl FromIterator<Signal> for Signals {
  fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
    let mut signals = Signals::new();
    for signal in iter {
      signals.add_signal(signal);
    }
    signals
  }
}

impl IntoIterator for Signals {
  type IntoIter = SignalsIter;
  type Item = Signal;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl fmt::Debug for Signals {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}
