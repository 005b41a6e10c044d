//! Pending alarm deadlines of one scheduler.

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use ahash::RandomState;
use hashbrown::HashMap;
use strand_actor_core_rs::ActorHandle;

type AlarmKey = (Duration, u64);

/// One deadline per actor, ordered by expiry.
///
/// Entries are keyed by `(deadline, sequence)` so equal deadlines fire in the
/// order they were set. Replacing or cancelling a deadline removes the previous
/// entry right away, releasing its handle.
pub(crate) struct AlarmTable {
  by_actor:      HashMap<usize, AlarmKey, RandomState>,
  by_deadline:   BTreeMap<AlarmKey, ActorHandle>,
  next_sequence: u64,
}

impl AlarmTable {
  pub(crate) fn new() -> Self {
    Self { by_actor: HashMap::with_hasher(RandomState::new()), by_deadline: BTreeMap::new(), next_sequence: 0 }
  }

  /// Replaces the deadline of `actor`; `None` cancels it.
  pub(crate) fn set(&mut self, actor: &ActorHandle, deadline: Option<Duration>) {
    let id = actor_id(actor);
    if let Some(previous) = self.by_actor.remove(&id) {
      self.by_deadline.remove(&previous);
    }
    let Some(deadline) = deadline else {
      return;
    };
    let key = (deadline, self.next_sequence);
    self.next_sequence += 1;
    self.by_actor.insert(id, key);
    self.by_deadline.insert(key, Arc::clone(actor));
  }

  /// Removes and returns every actor whose deadline is at or before `now`.
  pub(crate) fn take_due(&mut self, now: Duration) -> Vec<ActorHandle> {
    let mut due = Vec::new();
    while let Some(entry) = self.by_deadline.first_entry() {
      if entry.key().0 > now {
        break;
      }
      let actor = entry.remove();
      self.by_actor.remove(&actor_id(&actor));
      due.push(actor);
    }
    due
  }

  /// Returns the earliest deadline.
  pub(crate) fn next_deadline(&self) -> Option<Duration> {
    self.by_deadline.keys().next().map(|&(deadline, _)| deadline)
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.by_actor.len()
  }

  #[cfg(test)]
  pub(crate) fn stored(&self) -> usize {
    self.by_deadline.len()
  }

  /// Drops every deadline and returns how many there were.
  pub(crate) fn clear(&mut self) -> usize {
    let live = self.by_deadline.len();
    self.by_actor.clear();
    self.by_deadline.clear();
    live
  }
}

fn actor_id(actor: &ActorHandle) -> usize {
  Arc::as_ptr(actor).cast::<()>() as usize
}
