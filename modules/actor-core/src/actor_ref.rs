//! Typed reference used to talk to an actor.

use alloc::sync::Arc;

use crate::{
  Actor, ActorContext, ActorExecutor, ActorHandle, ActorInfo, ActorMessage, ActorOptions, EMPTY_LINK_TOKEN,
  ExecutorOptions, SchedulerDispatcher, Signal, Signals,
};

/// Cloneable reference to an actor of type `A`.
///
/// Every send is a one-shot executor pass against an explicit dispatcher: when the
/// actor is idle the calling thread runs it right away, otherwise the work is left
/// for whoever owns it.
pub struct ActorRef<A: Actor> {
  info:       Arc<ActorInfo<A>>,
  link_token: u64,
}

impl<A: Actor> ActorRef<A> {
  /// Registers `actor` and queues it for its start-up signal.
  ///
  /// Without an explicit scheduler in `options` the actor is bound to the
  /// dispatcher's scheduler.
  #[must_use]
  pub fn spawn(dispatcher: &dyn SchedulerDispatcher, actor: A, options: ActorOptions) -> Self {
    let options =
      if options.has_scheduler() { options } else { options.on_scheduler(dispatcher.scheduler_id()) };
    let info = ActorInfo::new(actor, &options);
    let handle: ActorHandle = info.clone();
    dispatcher.add_to_queue(handle, options.scheduler_id(), !options.is_shared());
    Self::from_info(info)
  }

  /// Wraps an existing cell.
  #[must_use]
  pub const fn from_info(info: Arc<ActorInfo<A>>) -> Self {
    Self { info, link_token: EMPTY_LINK_TOKEN }
  }

  /// Returns a reference that stamps `link_token` on the messages it sends.
  #[must_use]
  pub fn with_link_token(&self, link_token: u64) -> Self {
    Self { info: self.info.clone(), link_token }
  }

  /// Returns the link token stamped on sent messages.
  #[must_use]
  pub const fn link_token(&self) -> u64 {
    self.link_token
  }

  /// Sends a closure message.
  pub fn send_closure<F>(&self, dispatcher: &dyn SchedulerDispatcher, handler: F)
  where
    F: FnOnce(&mut A, &mut ActorContext<'_>) + Send + 'static, {
    self.send_message(dispatcher, ActorMessage::new(handler));
  }

  /// Sends a prepared message, stamping this reference's link token unless the
  /// message already carries one.
  pub fn send_message(&self, dispatcher: &dyn SchedulerDispatcher, message: ActorMessage<A>) {
    let message = if message.link_token() == EMPTY_LINK_TOKEN { message.with_link_token(self.link_token) } else { message };
    let mut executor = ActorExecutor::new(&self.info, dispatcher, self.sender_options(dispatcher));
    executor.send(message);
    executor.finish();
  }

  /// Sends raw signals.
  pub fn send_signals(&self, dispatcher: &dyn SchedulerDispatcher, signals: Signals) {
    let mut executor = ActorExecutor::new(&self.info, dispatcher, self.sender_options(dispatcher));
    if executor.can_send_immediate() {
      executor.send_immediate_signals(signals);
    } else {
      executor.send_signals(signals);
    }
    executor.finish();
  }

  /// Stops the actor after its pending higher-priority signals.
  pub fn kill(&self, dispatcher: &dyn SchedulerDispatcher) {
    self.send_signals(dispatcher, Signals::one(Signal::Kill));
  }

  /// Wakes the actor up.
  pub fn wake_up(&self, dispatcher: &dyn SchedulerDispatcher) {
    self.send_signals(dispatcher, Signals::one(Signal::Wakeup));
  }

  /// Asks the actor to hang up, after the messages already queued.
  pub fn hangup(&self, dispatcher: &dyn SchedulerDispatcher) {
    self.send_message(dispatcher, ActorMessage::hangup());
  }

  /// Returns `true` once the actor has stopped.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.info.is_closed()
  }

  /// Returns the diagnostic name.
  #[must_use]
  pub fn name(&self) -> &str {
    self.info.name()
  }

  /// Returns the actor cell.
  #[must_use]
  pub const fn info(&self) -> &Arc<ActorInfo<A>> {
    &self.info
  }

  /// Returns the type-erased handle used by run queues.
  #[must_use]
  pub fn handle(&self) -> ActorHandle {
    self.info.clone()
  }

  // The owner thread of the actor's own scheduler may run a pinned actor inline.
  fn sender_options(&self, dispatcher: &dyn SchedulerDispatcher) -> ExecutorOptions {
    let owner_thread =
      dispatcher.has_poll() && self.info.state().flags_relaxed().scheduler_id() == dispatcher.scheduler_id();
    ExecutorOptions::new().with_has_poll(owner_thread)
  }
}

impl<A: Actor> Clone for ActorRef<A> {
  fn clone(&self) -> Self {
    Self { info: self.info.clone(), link_token: self.link_token }
  }
}

impl<A: Actor> core::fmt::Debug for ActorRef<A> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorRef").field("name", &self.info.name()).field("link_token", &self.link_token).finish()
  }
}
