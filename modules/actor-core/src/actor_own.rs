//! Owning handle that ties an actor's lifetime to its owner.


use alloc::sync::Arc;

use crate::{Actor, ActorOptions, ActorRef, SchedulerDispatcher};

/// Sole owner of an actor: dropping it hangs the actor up.
///
/// Wrapping a linked reference (see [`ActorRef::with_link_token`]) delivers the
/// hang-up with that token, so an actor serving several owners can tell which one
/// went away. [`release`](Self::release) gives up ownership without hanging up.
pub struct ActorOwn<A: Actor> {
  actor:      Option<ActorRef<A>>,
  dispatcher: Arc<dyn SchedulerDispatcher>,
}

impl<A: Actor> ActorOwn<A> {
  /// Takes ownership of `actor`; `dispatcher` delivers the eventual hang-up.
  #[must_use]
  pub fn new(actor: ActorRef<A>, dispatcher: Arc<dyn SchedulerDispatcher>) -> Self {
    Self { actor: Some(actor), dispatcher }
  }

  /// Spawns `actor` and owns it.
  #[must_use]
  pub fn spawn(dispatcher: Arc<dyn SchedulerDispatcher>, actor: A, options: ActorOptions) -> Self {
    let actor = ActorRef::spawn(&*dispatcher, actor, options);
    Self::new(actor, dispatcher)
  }

  /// Returns an empty handle.
  #[must_use]
  pub fn empty(dispatcher: Arc<dyn SchedulerDispatcher>) -> Self {
    Self { actor: None, dispatcher }
  }

  /// Returns `true` when nothing is owned.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.actor.is_none()
  }

  /// Returns the owned reference.
  #[must_use]
  pub const fn get(&self) -> Option<&ActorRef<A>> {
    self.actor.as_ref()
  }

  /// Gives up ownership; the actor keeps running.
  pub fn release(&mut self) -> Option<ActorRef<A>> {
    self.actor.take()
  }

  /// Hangs up the owned actor, if any, and takes ownership of `actor`.
  pub fn reset(&mut self, actor: Option<ActorRef<A>>) {
    self.hangup();
    self.actor = actor;
  }

  fn hangup(&mut self) {
    if let Some(actor) = self.actor.take() {
      actor.hangup(&*self.dispatcher);
    }
  }
}

impl<A: Actor> Drop for ActorOwn<A> {
  fn drop(&mut self) {
    self.hangup();
  }
}

impl<A: Actor> core::fmt::Debug for ActorOwn<A> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorOwn").field("actor", &self.actor).finish_non_exhaustive()
  }
}
