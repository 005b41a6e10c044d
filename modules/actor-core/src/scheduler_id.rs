//! Identifier of the scheduler that owns an actor.


use core::fmt;

/// Names a scheduler (an OS-thread pool) inside a scheduler group.
///
/// Valid identifiers are `0..=254`; the default value is invalid and must be replaced
/// before anything is routed with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchedulerId {
  id: i16,
}

impl SchedulerId {
  /// Largest valid identifier.
  pub const MAX: u8 = 254;
  /// Number of distinct valid identifiers.
  pub const CAPACITY: usize = Self::MAX as usize + 1;
  /// Raw byte reserved to encode the invalid identifier inside a state word.
  pub(crate) const INVALID_RAW: u8 = u8::MAX;

  /// Creates an identifier from a raw byte.
  ///
  /// # Panics
  ///
  /// Panics when `id` is `255`, which is reserved for the invalid identifier.
  #[must_use]
  pub const fn new(id: u8) -> Self {
    assert!(id <= Self::MAX, "scheduler id 255 is reserved");
    Self { id: id as i16 }
  }

  /// Returns the invalid identifier.
  #[must_use]
  pub const fn invalid() -> Self {
    Self { id: -1 }
  }

  /// Returns `true` when the identifier names a scheduler.
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.id >= 0
  }

  /// Returns the numeric identifier.
  ///
  /// # Panics
  ///
  /// Panics when the identifier is invalid; callers must establish a valid scheduler
  /// before routing.
  #[must_use]
  pub const fn value(&self) -> u8 {
    assert!(self.is_valid(), "value() called on an invalid scheduler id");
    self.id as u8
  }

  /// Returns the identifier as a table index.
  ///
  /// # Panics
  ///
  /// Panics when the identifier is invalid.
  #[must_use]
  pub const fn index(&self) -> usize {
    self.value() as usize
  }

  pub(crate) const fn to_raw(self) -> u8 {
    if self.is_valid() { self.id as u8 } else { Self::INVALID_RAW }
  }

  pub(crate) const fn from_raw(raw: u8) -> Self {
    if raw == Self::INVALID_RAW { Self::invalid() } else { Self::new(raw) }
  }
}

impl Default for SchedulerId {
  fn default() -> Self {
    Self::invalid()
  }
}

impl fmt::Debug for SchedulerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_valid() { write!(f, "SchedulerId({})", self.id) } else { f.write_str("SchedulerId(invalid)") }
  }
}

impl fmt::Display for SchedulerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_valid() { write!(f, "{}", self.id) } else { f.write_str("invalid") }
  }
}
