//! One pass of work over an actor: acquire, drain, publish.


use alloc::sync::Arc;

use crate::{
  Actor, ActorContext, ActorHandle, ActorInfo, ActorLocker, ActorMessage, ActorStateFlags, ExecutorOptions,
  SchedulerDispatcher, Signal, Signals,
};

/// Drives an actor through its [`ActorLocker`].
///
/// Construction already tries to take the lock and, on success, drains every
/// pending signal (in priority order) and every queued message. Callers may then
/// [`send`](Self::send) more work and must finish with [`finish`](Self::finish),
/// which publishes the new flags and queues the actor when work is left over.
///
/// When the lock is taken by someone else, everything sent through the executor is
/// merged into the state word for the current owner to pick up.
pub struct ActorExecutor<'a, A: Actor> {
  info:            &'a Arc<ActorInfo<A>>,
  options:         ExecutorOptions,
  locker:          ActorLocker<'a>,
  context:         ActorContext<'a>,
  flags:           ActorStateFlags,
  pending_signals: Signals,
}

impl<'a, A: Actor> ActorExecutor<'a, A> {
  /// Starts a pass over `info`.
  ///
  /// # Panics
  ///
  /// Panics when a queue worker pops an actor its options cannot execute, which
  /// means the actor was queued on the wrong kind of thread.
  #[must_use]
  pub fn new(info: &'a Arc<ActorInfo<A>>, dispatcher: &'a dyn SchedulerDispatcher, options: ExecutorOptions) -> Self {
    let locker = ActorLocker::with_options(info.state(), options.locker_options());
    let flags = locker.flags();
    let mut executor = Self {
      info,
      options,
      locker,
      context: ActorContext::new(dispatcher),
      flags,
      pending_signals: Signals::new(),
    };
    executor.start();
    executor
  }

  /// Returns `true` unless the actor is known to be closed.
  #[must_use]
  pub const fn can_send(&self) -> bool {
    !self.flags.is_closed()
  }

  /// Returns `true` when work can run on the calling thread right now.
  #[must_use]
  pub const fn can_send_immediate(&self) -> bool {
    self.locker.own_lock() && !self.context.has_flags() && self.locker.can_execute() && !self.flags.is_closed()
  }

  /// Runs `message` on the calling thread.
  ///
  /// Big messages are deferred to a queue worker instead.
  ///
  /// # Panics
  ///
  /// Panics unless [`can_send_immediate`](Self::can_send_immediate) holds.
  pub fn send_immediate(&mut self, message: ActorMessage<A>) {
    assert!(self.can_send_immediate(), "send_immediate called on an actor that cannot run here");
    if message.is_big() && !self.options.from_queue() {
      self.defer(message);
      return;
    }
    self.run_message(message);
  }

  /// Handles `signals` on the calling thread until a handler ends the pass.
  ///
  /// # Panics
  ///
  /// Panics unless [`can_send_immediate`](Self::can_send_immediate) holds.
  pub fn send_immediate_signals(&mut self, mut signals: Signals) {
    assert!(self.can_send_immediate(), "send_immediate_signals called on an actor that cannot run here");
    while self.can_send_immediate() && self.flush_one_signal(&mut signals) {}
    self.pending_signals.add_signals(signals);
  }

  /// Delivers `message`, inline when possible and through the mailbox otherwise.
  ///
  /// Messages to a closed actor are dropped.
  pub fn send(&mut self, message: ActorMessage<A>) {
    if !self.can_send() {
      return;
    }
    if self.can_send_immediate() {
      self.send_immediate(message);
      return;
    }
    self.info.mailbox().push(message);
    self.pending_signals.add_signal(Signal::Message);
  }

  /// Records `signals` for publication by [`finish`](Self::finish).
  pub const fn send_signals(&mut self, signals: Signals) {
    if self.can_send() {
      self.pending_signals.add_signals(signals);
    }
  }

  /// Ends the pass: applies handler requests, publishes flags and queues the actor
  /// when signals remain.
  pub fn finish(mut self) {
    if !self.locker.own_lock() {
      if self.pending_signals.is_empty() || !self.locker.add_signals(self.pending_signals) {
        return;
      }
      self.flags = self.locker.flags();
      self.pending_signals = self.flags.signals();
    }

    if self.context.has_flags() || self.context.alarm_changed() {
      self.apply_requests();
    }
    if self.flags.is_closed() {
      self.publish_closed();
      return;
    }
    self.pending_signals.add_signals(self.context.take_requested());
    self.flags.set_signals(self.pending_signals);

    let mut add_to_queue = false;
    loop {
      let mut signals = self.flags.signals();
      if signals.has_signal(Signal::Pop) {
        signals.clear_signal(Signal::Pop);
        self.flags.set_signals(signals);
        self.flags.set_in_queue(false);
      }
      if self.flags.has_signals() && !self.flags.is_in_queue() {
        add_to_queue = true;
        self.flags.set_in_queue(true);
      }
      if self.locker.try_unlock(self.flags) {
        if add_to_queue {
          self.context.dispatcher().add_to_queue(self.handle(), self.flags.scheduler_id(), !self.flags.is_shared());
        }
        return;
      }
      self.flags = self.locker.flags();
    }
  }

  fn start(&mut self) {
    if !self.can_send() {
      return;
    }
    let mut signals = Signals::new();
    if self.options.from_queue() {
      signals.add_signal(Signal::Pop);
    }
    if !self.locker.try_lock() {
      self.pending_signals.add_signals(signals);
      return;
    }
    self.flags = self.locker.flags();
    signals.add_signals(self.flags.signals());
    if self.flags.is_closed() || !self.locker.can_execute() {
      assert!(
        self.flags.is_closed() || !self.options.from_queue(),
        "queue worker popped an actor it cannot execute"
      );
      self.pending_signals.add_signals(signals);
      return;
    }
    if self.options.from_queue() {
      self.flags.set_pause(false);
    }

    self.info.mailbox().pop_all();
    let info = self.info;
    // SAFETY: the lock is owned.
    let alarm_at = unsafe { info.slot() }.alarm_at;
    self.context.load_alarm(alarm_at);
    while !self.context.has_flags() && self.flush_one(&mut signals) {}
    self.pending_signals.add_signals(signals);
  }

  fn flush_one(&mut self, signals: &mut Signals) -> bool {
    self.flush_one_signal(signals) || self.flush_one_message()
  }

  fn flush_one_signal(&mut self, signals: &mut Signals) -> bool {
    let Some(signal) = signals.first_signal() else {
      return false;
    };
    signals.clear_signal(signal);
    match signal {
      | Signal::Kill => self.context.stop(),
      | Signal::Pop => self.flags.set_in_queue(false),
      | Signal::Wakeup | Signal::Alarm | Signal::StartUp | Signal::TearDown => self.deliver(signal),
      // Messages drain through the mailbox; affinity requests carry no handler.
      | Signal::Message | Signal::Io | Signal::Cpu => {},
    }
    true
  }

  fn flush_one_message(&mut self) -> bool {
    let Some(message) = self.info.mailbox().read() else {
      return false;
    };
    if message.is_big() && !self.options.from_queue() {
      self.defer(message);
      return false;
    }
    self.run_message(message);
    true
  }

  fn deliver(&mut self, signal: Signal) {
    let info = self.info;
    // SAFETY: signals are only flushed while the lock is owned.
    let Some(actor) = unsafe { info.slot() }.actor.as_mut() else {
      return;
    };
    let ctx = &mut self.context;
    match signal {
      | Signal::Wakeup => actor.wake_up(ctx),
      | Signal::StartUp => actor.start_up(ctx),
      | Signal::TearDown => actor.tear_down(ctx),
      | Signal::Alarm => {
        if ctx.alarm_at().is_some_and(|deadline| deadline <= ctx.now()) {
          ctx.cancel_alarm();
          actor.alarm(ctx);
        }
      },
      | _ => {},
    }
  }

  fn run_message(&mut self, message: ActorMessage<A>) {
    let info = self.info;
    // SAFETY: messages are only run while the lock is owned.
    if let Some(actor) = unsafe { info.slot() }.actor.as_mut() {
      self.context.run(actor, message);
    }
  }

  fn defer(&mut self, message: ActorMessage<A>) {
    self.info.mailbox().delay(message);
    self.pending_signals.add_signal(Signal::Message);
    self.context.pause();
  }

  fn apply_requests(&mut self) {
    let info = self.info;
    // SAFETY: only called from `finish` while the lock is owned.
    let slot = unsafe { info.slot() };
    if self.context.is_stopping() {
      if slot.alarm_at.is_some() {
        self.context.dispatcher().set_alarm(&self.handle(), None);
      }
      self.flags.set_closed(true);
      if let Some(actor) = slot.actor.as_mut() {
        actor.tear_down(&mut self.context);
      }
      // SAFETY: as above; `slot` is not used past this point.
      unsafe { info.destroy() };
      return;
    }
    if self.context.is_paused() {
      self.flags.set_pause(true);
    }
    if self.context.alarm_changed() && slot.alarm_at != self.context.alarm_at() {
      slot.alarm_at = self.context.alarm_at();
      self.context.dispatcher().set_alarm(&self.handle(), slot.alarm_at);
    }
  }

  fn publish_closed(&mut self) {
    self.info.mailbox().clear();
    loop {
      self.flags.clear_signals();
      self.flags.set_in_queue(false);
      if self.locker.try_unlock(self.flags) {
        return;
      }
      self.flags = self.locker.flags();
    }
  }

  fn handle(&self) -> ActorHandle {
    let handle: Arc<ActorInfo<A>> = Arc::clone(self.info);
    handle
  }
}
