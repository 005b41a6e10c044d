use std::{sync::Arc, time::Duration};

use strand_actor_core_rs::{Actor, ActorHandle, ActorInfo, ActorOptions};

use super::AlarmTable;

struct Idle;

impl Actor for Idle {}

fn handle() -> ActorHandle {
  ActorInfo::new(Idle, &ActorOptions::new())
}

fn ms(value: u64) -> Duration {
  Duration::from_millis(value)
}

#[test]
fn due_actors_are_returned_in_deadline_order() {
  let mut table = AlarmTable::new();
  let (first, second, third) = (handle(), handle(), handle());
  table.set(&second, Some(ms(20)));
  table.set(&first, Some(ms(10)));
  table.set(&third, Some(ms(30)));

  assert_eq!(table.next_deadline(), Some(ms(10)));
  let due = table.take_due(ms(25));
  assert_eq!(due.len(), 2);
  assert!(Arc::ptr_eq(&due[0], &first));
  assert!(Arc::ptr_eq(&due[1], &second));
  assert_eq!(table.len(), 1);
  assert_eq!(table.next_deadline(), Some(ms(30)));
}

#[test]
fn resetting_replaces_the_previous_deadline() {
  let mut table = AlarmTable::new();
  let actor = handle();
  table.set(&actor, Some(ms(10)));
  table.set(&actor, Some(ms(50)));

  assert!(table.take_due(ms(20)).is_empty());
  assert_eq!(table.next_deadline(), Some(ms(50)));
  assert_eq!(table.take_due(ms(50)).len(), 1);
  assert_eq!(table.len(), 0);
}

#[test]
fn cancelled_alarm_never_fires() {
  let mut table = AlarmTable::new();
  let actor = handle();
  table.set(&actor, Some(ms(10)));
  table.set(&actor, None);

  assert_eq!(table.next_deadline(), None);
  assert!(table.take_due(ms(100)).is_empty());
}

#[test]
fn clear_reports_live_alarms_only() {
  let mut table = AlarmTable::new();
  let (kept, cancelled) = (handle(), handle());
  table.set(&kept, Some(ms(10)));
  table.set(&cancelled, Some(ms(10)));
  table.set(&cancelled, None);

  assert_eq!(table.clear(), 1);
  assert_eq!(table.next_deadline(), None);
}

#[test]
fn rearming_behind_an_earlier_alarm_keeps_one_entry_per_actor() {
  let mut table = AlarmTable::new();
  let (early, rearmed) = (handle(), handle());
  table.set(&early, Some(ms(1_000)));

  for round in 0..1_000 {
    table.set(&rearmed, Some(ms(3_600_000 + round)));
  }
  assert_eq!(table.len(), 2);
  assert_eq!(table.stored(), 2);
  assert_eq!(Arc::strong_count(&rearmed), 2);

  table.set(&rearmed, None);
  assert_eq!(table.stored(), 1);
  assert_eq!(Arc::strong_count(&rearmed), 1);
  assert_eq!(table.next_deadline(), Some(ms(1_000)));
}

#[test]
fn equal_deadlines_fire_in_the_order_they_were_set() {
  let mut table = AlarmTable::new();
  let (first, second) = (handle(), handle());
  table.set(&first, Some(ms(10)));
  table.set(&second, Some(ms(10)));

  let due = table.take_due(ms(10));
  assert!(Arc::ptr_eq(&due[0], &first));
  assert!(Arc::ptr_eq(&due[1], &second));
  assert_eq!(table.stored(), 0);
}
