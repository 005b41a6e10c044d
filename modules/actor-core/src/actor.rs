//! Actor trait definitions.

use crate::ActorContext;

/// Lifecycle contract of an actor driven by signals.
///
/// Each handler corresponds to a [`Signal`](crate::Signal) and runs while the
/// executing thread owns the actor's lock, so `&mut self` is never shared.
/// Messages are closures over the concrete actor type (see
/// [`ActorMessage`](crate::ActorMessage)) and do not go through this trait.
pub trait Actor: Send + 'static {
  /// Handles [`Signal::StartUp`](crate::Signal::StartUp), the first signal of every actor.
  fn start_up(&mut self, _ctx: &mut ActorContext<'_>) {}

  /// Releases resources; runs on [`Signal::TearDown`](crate::Signal::TearDown) and once
  /// more when the actor stops.
  fn tear_down(&mut self, _ctx: &mut ActorContext<'_>) {}

  /// Handles a hang-up message. Stops the actor by default.
  fn hang_up(&mut self, ctx: &mut ActorContext<'_>) {
    ctx.stop();
  }

  /// Handles [`Signal::Wakeup`](crate::Signal::Wakeup). Runs [`run_loop`](Self::run_loop)
  /// by default.
  fn wake_up(&mut self, ctx: &mut ActorContext<'_>) {
    self.run_loop(ctx);
  }

  /// Handles an expired alarm. Runs [`run_loop`](Self::run_loop) by default.
  fn alarm(&mut self, ctx: &mut ActorContext<'_>) {
    self.run_loop(ctx);
  }

  /// Default work loop shared by wake-ups and alarms.
  fn run_loop(&mut self, _ctx: &mut ActorContext<'_>) {}
}
