//! Closure messages delivered to a concrete actor type.

use alloc::boxed::Box;

use crate::{Actor, ActorContext, EMPTY_LINK_TOKEN};

type Handler<A> = Box<dyn FnOnce(&mut A, &mut ActorContext<'_>) + Send>;

/// A unit of work queued in an actor's mailbox.
///
/// The handler runs with exclusive access to the actor. A *big* message is never
/// run inline by the sending thread; the executor defers it to a queue worker.
pub struct ActorMessage<A> {
  handler:    Handler<A>,
  link_token: u64,
  big:        bool,
}

impl<A> ActorMessage<A> {
  /// Wraps `handler` into a message with an empty link token.
  #[must_use]
  pub fn new<F>(handler: F) -> Self
  where
    F: FnOnce(&mut A, &mut ActorContext<'_>) + Send + 'static, {
    Self { handler: Box::new(handler), link_token: EMPTY_LINK_TOKEN, big: false }
  }

  /// Replaces the link token.
  #[must_use]
  pub const fn with_link_token(mut self, link_token: u64) -> Self {
    self.link_token = link_token;
    self
  }

  /// Marks the message as big.
  #[must_use]
  pub const fn with_big(mut self, big: bool) -> Self {
    self.big = big;
    self
  }

  /// Returns the link token.
  #[must_use]
  pub const fn link_token(&self) -> u64 {
    self.link_token
  }

  /// Returns `true` for big messages.
  #[must_use]
  pub const fn is_big(&self) -> bool {
    self.big
  }

  pub(crate) fn run(self, actor: &mut A, ctx: &mut ActorContext<'_>) {
    (self.handler)(actor, ctx);
  }
}

impl<A: Actor> ActorMessage<A> {
  /// Creates a message that invokes [`Actor::hang_up`].
  #[must_use]
  pub fn hangup() -> Self {
    Self::new(|actor: &mut A, ctx| actor.hang_up(ctx))
  }
}

impl<A> core::fmt::Debug for ActorMessage<A> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorMessage").field("link_token", &self.link_token).field("big", &self.big).finish_non_exhaustive()
  }
}
