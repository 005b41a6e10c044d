//! Dispatcher handle bound to one scheduler of a group.

use std::{sync::Arc, time::Duration};

use strand_actor_core_rs::{ActorHandle, SchedulerDispatcher, SchedulerId};
use tracing::{trace, warn};

use crate::{LOG_TARGET, group_shared::GroupShared, scheduler_queues::SchedulerQueues};

/// [`SchedulerDispatcher`] of one scheduler.
///
/// Cheap to clone; actors keep one to message each other from handlers or from
/// threads outside the group.
#[derive(Clone)]
pub struct SchedulerContext {
  id:       SchedulerId,
  shared:   Arc<GroupShared>,
  has_poll: bool,
}

impl SchedulerContext {
  pub(crate) fn new(id: SchedulerId, shared: Arc<GroupShared>) -> Self {
    debug_assert!(shared.queues(id).is_some());
    Self { id, shared, has_poll: false }
  }

  /// Context of the scheduler's owner thread, which may run its pinned actors inline.
  pub(crate) fn for_owner(self) -> Self {
    Self { has_poll: true, ..self }
  }

  /// Returns the scheduler this context is bound to.
  #[must_use]
  pub const fn id(&self) -> SchedulerId {
    self.id
  }

  /// Returns `true` once the group was asked to stop.
  #[must_use]
  pub fn is_stop_requested(&self) -> bool {
    self.shared.is_stop_requested()
  }

  pub(crate) fn queues(&self) -> &SchedulerQueues {
    &self.shared.schedulers()[self.id.index()]
  }

  fn route(&self, scheduler_id: SchedulerId) -> &SchedulerQueues {
    if !scheduler_id.is_valid() {
      return self.queues();
    }
    match self.shared.queues(scheduler_id) {
      | Some(queues) => queues,
      | None => {
        warn!(target: LOG_TARGET, requested = %scheduler_id, fallback = %self.id, "unknown scheduler, routing locally");
        self.queues()
      },
    }
  }
}

impl SchedulerDispatcher for SchedulerContext {
  fn scheduler_id(&self) -> SchedulerId {
    self.id
  }

  fn has_poll(&self) -> bool {
    self.has_poll
  }

  fn add_to_queue(&self, actor: ActorHandle, scheduler_id: SchedulerId, need_poll: bool) {
    let queues = self.route(scheduler_id);
    trace!(target: LOG_TARGET, actor = actor.name(), scheduler = %queues.id(), need_poll, "queue actor");
    if need_poll {
      queues.push_pinned(actor);
    } else {
      queues.push_shared(actor);
    }
  }

  fn set_alarm(&self, actor: &ActorHandle, deadline: Option<Duration>) {
    let queues = self.route(actor.state().flags_relaxed().scheduler_id());
    trace!(target: LOG_TARGET, actor = actor.name(), scheduler = %queues.id(), ?deadline, "set alarm");
    queues.set_alarm(actor, deadline);
  }

  fn now(&self) -> Duration {
    self.shared.now()
  }
}

impl core::fmt::Debug for SchedulerContext {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SchedulerContext").field("id", &self.id).field("has_poll", &self.has_poll).finish_non_exhaustive()
  }
}
