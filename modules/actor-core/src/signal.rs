//! Signal kinds delivered to actors.

use core::fmt;

/// A typed notification merged into an actor's state word.
///
/// Discriminants double as bit indices inside [`Signals`](crate::Signals) and as
/// priorities: a lower value is handled first by every draining loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Signal {
  /// Asks the actor to run its loop.
  Wakeup   = 1,
  /// The actor's alarm deadline may have passed.
  Alarm    = 2,
  /// Requests termination.
  Kill     = 3,
  /// Requests migration to the scheduler's owner thread.
  Io       = 4,
  /// Requests migration to the scheduler's CPU workers.
  Cpu      = 5,
  /// First signal of every actor.
  StartUp  = 6,
  /// Asks the actor to release its resources.
  TearDown = 7,
  /// The actor has just been popped from a run queue.
  Pop      = 8,
  /// The mailbox holds at least one message.
  Message  = 9,
}

impl Signal {
  /// Every signal kind in priority order.
  pub const ALL: [Signal; 9] = [
    Signal::Wakeup,
    Signal::Alarm,
    Signal::Kill,
    Signal::Io,
    Signal::Cpu,
    Signal::StartUp,
    Signal::TearDown,
    Signal::Pop,
    Signal::Message,
  ];

  /// Returns the numeric index of the signal.
  #[must_use]
  pub const fn index(self) -> u32 {
    self as u32
  }

  /// Returns the single-bit mask of the signal.
  #[must_use]
  pub const fn bit(self) -> u32 {
    1 << self.index()
  }

  /// Resolves a signal from its numeric index.
  #[must_use]
  pub const fn from_index(index: u32) -> Option<Self> {
    match index {
      | 1 => Some(Signal::Wakeup),
      | 2 => Some(Signal::Alarm),
      | 3 => Some(Signal::Kill),
      | 4 => Some(Signal::Io),
      | 5 => Some(Signal::Cpu),
      | 6 => Some(Signal::StartUp),
      | 7 => Some(Signal::TearDown),
      | 8 => Some(Signal::Pop),
      | 9 => Some(Signal::Message),
      | _ => None,
    }
  }
}

impl fmt::Display for Signal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      | Signal::Wakeup => "wakeup",
      | Signal::Alarm => "alarm",
      | Signal::Kill => "kill",
      | Signal::Io => "io",
      | Signal::Cpu => "cpu",
      | Signal::StartUp => "start-up",
      | Signal::TearDown => "tear-down",
      | Signal::Pop => "pop",
      | Signal::Message => "message",
    };
    f.write_str(name)
  }
}
