use std::collections::VecDeque;

use strand_actor_core_rs::ActorHandle;

use crate::alarm_table::AlarmTable;

/// Work handed to a scheduler's owner thread, guarded by one mutex.
pub(crate) struct OwnerState {
  pub(crate) pinned: VecDeque<ActorHandle>,
  pub(crate) shared: VecDeque<ActorHandle>,
  pub(crate) alarms: AlarmTable,
}

impl OwnerState {
  pub(crate) fn new() -> Self {
    Self { pinned: VecDeque::new(), shared: VecDeque::new(), alarms: AlarmTable::new() }
  }

  pub(crate) fn has_work(&self) -> bool {
    !self.pinned.is_empty() || !self.shared.is_empty()
  }
}
