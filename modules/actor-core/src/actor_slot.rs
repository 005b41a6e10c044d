//! Lock-guarded storage of an actor value and its alarm.

use core::time::Duration;

/// Actor data only the lock holder may touch.
pub(crate) struct ActorSlot<A> {
  pub(crate) actor:    Option<A>,
  pub(crate) alarm_at: Option<Duration>,
}

impl<A> ActorSlot<A> {
  pub(crate) const fn new(actor: A) -> Self {
    Self { actor: Some(actor), alarm_at: None }
  }
}
