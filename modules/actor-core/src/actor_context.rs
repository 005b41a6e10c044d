//! Per-execution context handed to actor handlers.

use core::time::Duration;

use crate::{ActorMessage, SchedulerDispatcher, SchedulerId, Signal, Signals};

const STOP: u8 = 1 << 0;
const PAUSE: u8 = 1 << 1;

/// Link token carried by messages that were not sent through a linked reference.
pub const EMPTY_LINK_TOKEN: u64 = u64::MAX;

/// State an actor handler can read or request while it owns the actor.
///
/// Requests such as [`stop`](Self::stop) or [`pause`](Self::pause) end the current
/// draining pass; they are applied when the executor publishes the actor's flags.
pub struct ActorContext<'a> {
  dispatcher:    &'a dyn SchedulerDispatcher,
  flags:         u8,
  link_token:    u64,
  alarm_at:      Option<Duration>,
  alarm_changed: bool,
  requested:     Signals,
}

impl<'a> ActorContext<'a> {
  pub(crate) fn new(dispatcher: &'a dyn SchedulerDispatcher) -> Self {
    Self {
      dispatcher,
      flags: 0,
      link_token: EMPTY_LINK_TOKEN,
      alarm_at: None,
      alarm_changed: false,
      requested: Signals::new(),
    }
  }

  /// Requests the actor to stop once the current handler returns.
  pub const fn stop(&mut self) {
    self.flags |= STOP;
  }

  /// Returns `true` when a stop was requested.
  #[must_use]
  pub const fn is_stopping(&self) -> bool {
    self.flags & STOP != 0
  }

  /// Defers the remaining work of this pass to a queue worker.
  pub const fn pause(&mut self) {
    self.flags |= PAUSE;
  }

  /// Returns `true` when a pause was requested.
  #[must_use]
  pub const fn is_paused(&self) -> bool {
    self.flags & PAUSE != 0
  }

  /// Returns `true` when the current pass must end.
  #[must_use]
  pub const fn has_flags(&self) -> bool {
    self.flags != 0
  }

  /// Schedules a [`Signal::Wakeup`] once the current pass ends.
  pub const fn yield_now(&mut self) {
    self.requested.add_signal(Signal::Wakeup);
  }

  /// Returns the pending alarm deadline, measured on the dispatcher's clock.
  #[must_use]
  pub const fn alarm_at(&self) -> Option<Duration> {
    self.alarm_at
  }

  /// Sets the alarm deadline, replacing any previous one.
  pub const fn set_alarm_at(&mut self, deadline: Duration) {
    self.alarm_at = Some(deadline);
    self.alarm_changed = true;
  }

  /// Sets the alarm to fire `delay` from now.
  pub fn set_alarm_in(&mut self, delay: Duration) {
    let deadline = self.now().saturating_add(delay);
    self.set_alarm_at(deadline);
  }

  /// Cancels the pending alarm.
  pub const fn cancel_alarm(&mut self) {
    self.alarm_at = None;
    self.alarm_changed = true;
  }

  /// Returns the link token of the message being handled.
  #[must_use]
  pub const fn link_token(&self) -> u64 {
    self.link_token
  }

  /// Returns the dispatcher's current time.
  #[must_use]
  pub fn now(&self) -> Duration {
    self.dispatcher.now()
  }

  /// Returns the scheduler running this pass.
  #[must_use]
  pub fn scheduler_id(&self) -> SchedulerId {
    self.dispatcher.scheduler_id()
  }

  /// Returns the dispatcher, e.g. to message other actors.
  #[must_use]
  pub fn dispatcher(&self) -> &'a dyn SchedulerDispatcher {
    self.dispatcher
  }

  pub(crate) const fn set_link_token(&mut self, link_token: u64) {
    self.link_token = link_token;
  }

  pub(crate) const fn load_alarm(&mut self, alarm_at: Option<Duration>) {
    self.alarm_at = alarm_at;
    self.alarm_changed = false;
  }

  pub(crate) const fn alarm_changed(&self) -> bool {
    self.alarm_changed
  }

  pub(crate) const fn take_requested(&mut self) -> Signals {
    let requested = self.requested;
    self.requested = Signals::new();
    requested
  }

  pub(crate) fn run<A>(&mut self, actor: &mut A, message: ActorMessage<A>) {
    self.set_link_token(message.link_token());
    message.run(actor, self);
  }
}
