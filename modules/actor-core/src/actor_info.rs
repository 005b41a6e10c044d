//! Actor cell: state word, mailbox and the lock-guarded actor value.

use alloc::{string::String, sync::Arc};
use core::cell::UnsafeCell;

use crate::{
  Actor, ActorExecutor, ActorMailbox, ActorState, ActorStateFlags, ExecutorOptions, ScheduledActor,
  SchedulerDispatcher, Signal, Signals, actor_slot::ActorSlot,
};

/// Everything the runtime keeps for one actor.
///
/// The actor value and its alarm deadline live behind an [`UnsafeCell`]; only the
/// thread whose [`ActorLocker`](crate::ActorLocker) owns the state word may reach
/// them, and only through [`ActorExecutor`].
pub struct ActorInfo<A: Actor> {
  state:   ActorState,
  mailbox: ActorMailbox<A>,
  slot:    UnsafeCell<ActorSlot<A>>,
  name:    String,
}

// SAFETY: the slot is only accessed by the holder of the state word's lock bit,
// which the acquire/release CAS protocol makes exclusive.
unsafe impl<A: Actor> Sync for ActorInfo<A> {}

impl<A: Actor> ActorInfo<A> {
  /// Creates the cell with a pending [`Signal::StartUp`], already marked as queued.
  ///
  /// The caller must put the returned actor on a run queue right away; see
  /// [`ActorRef::spawn`](crate::ActorRef::spawn).
  #[must_use]
  pub fn new(actor: A, options: &crate::ActorOptions) -> Arc<Self> {
    let mut flags = ActorStateFlags::new();
    flags.set_scheduler_id(options.scheduler_id());
    flags.set_shared(options.is_shared());
    flags.set_in_queue(true);
    flags.set_signals(Signals::one(Signal::StartUp));
    Arc::new(Self {
      state: ActorState::new(flags),
      mailbox: ActorMailbox::new(),
      slot: UnsafeCell::new(ActorSlot::new(actor)),
      name: String::from(options.name()),
    })
  }

  /// Returns the state word.
  #[must_use]
  pub const fn state(&self) -> &ActorState {
    &self.state
  }

  /// Returns the mailbox.
  #[must_use]
  pub const fn mailbox(&self) -> &ActorMailbox<A> {
    &self.mailbox
  }

  /// Returns the diagnostic name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns `true` once the actor has stopped.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state.flags_relaxed().is_closed()
  }

  /// Grants access to the lock-guarded slot.
  ///
  /// # Safety
  ///
  /// The caller must own the actor lock and must not hold another reference
  /// obtained from this method.
  #[allow(clippy::mut_from_ref)]
  pub(crate) unsafe fn slot(&self) -> &mut ActorSlot<A> {
    // SAFETY: exclusivity is guaranteed by the caller.
    unsafe { &mut *self.slot.get() }
  }

  /// Drops the actor value and its alarm; later passes find an empty slot.
  ///
  /// # Safety
  ///
  /// Same contract as [`slot`](Self::slot).
  pub(crate) unsafe fn destroy(&self) {
    // SAFETY: forwarded to the caller.
    let slot = unsafe { self.slot() };
    slot.actor = None;
    slot.alarm_at = None;
  }
}

impl<A: Actor> ScheduledActor for ActorInfo<A> {
  fn execute(self: Arc<Self>, dispatcher: &dyn SchedulerDispatcher, options: ExecutorOptions) {
    ActorExecutor::new(&self, dispatcher, options).finish();
  }

  fn send_signals(self: Arc<Self>, dispatcher: &dyn SchedulerDispatcher, signals: Signals, options: ExecutorOptions) {
    let mut executor = ActorExecutor::new(&self, dispatcher, options);
    if executor.can_send_immediate() {
      executor.send_immediate_signals(signals);
    } else {
      executor.send_signals(signals);
    }
    executor.finish();
  }

  fn state(&self) -> &ActorState {
    &self.state
  }

  fn name(&self) -> &str {
    &self.name
  }
}

impl<A: Actor> core::fmt::Debug for ActorInfo<A> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorInfo").field("name", &self.name).field("state", &self.state).finish_non_exhaustive()
  }
}
