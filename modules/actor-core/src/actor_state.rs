//! Atomic home of an actor's state word.

use portable_atomic::{AtomicU32, Ordering};

use crate::ActorStateFlags;

/// Canonical, shared copy of an actor's [`ActorStateFlags`].
///
/// Besides the relaxed accessors used to take an initial snapshot, the word is only
/// changed by [`ActorLocker`](crate::ActorLocker) through compare-and-swap.
pub struct ActorState {
  state: AtomicU32,
}

impl ActorState {
  /// Creates a state word holding `flags`.
  #[must_use]
  pub const fn new(flags: ActorStateFlags) -> Self {
    Self { state: AtomicU32::new(flags.raw()) }
  }

  /// Loads the word without synchronisation.
  ///
  /// The result is only a starting point for a compare-and-swap; it implies no
  /// ownership and may already be stale.
  #[must_use]
  pub fn flags_relaxed(&self) -> ActorStateFlags {
    ActorStateFlags::from_raw(self.state.load(Ordering::Relaxed))
  }

  /// Overwrites the word without synchronisation.
  ///
  /// Only valid while no other thread can observe the actor, i.e. during registration.
  pub fn set_flags_relaxed(&self, flags: ActorStateFlags) {
    self.state.store(flags.raw(), Ordering::Relaxed);
  }

  /// Swaps `*current` for `new` when the word still equals `*current`.
  ///
  /// On failure `*current` is refreshed with the observed word, so a retry loop can
  /// rebuild its candidate without another load.
  pub(crate) fn compare_exchange(&self, current: &mut ActorStateFlags, new: ActorStateFlags) -> bool {
    match self.state.compare_exchange(current.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire) {
      | Ok(_) => true,
      | Err(actual) => {
        *current = ActorStateFlags::from_raw(actual);
        false
      },
    }
  }
}

impl Default for ActorState {
  fn default() -> Self {
    Self::new(ActorStateFlags::new())
  }
}

impl core::fmt::Debug for ActorState {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("ActorState").field(&self.flags_relaxed()).finish()
  }
}
