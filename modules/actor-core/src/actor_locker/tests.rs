use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::{
  sync::{Arc, Barrier, mpsc},
  thread,
};

use crate::{ActorLocker, ActorLockerOptions, ActorState, ActorStateFlags, SchedulerId, Signal, Signals};

fn collect(signals: Signals) -> Vec<Signal> {
  signals.iter().collect()
}

#[test]
fn lock_unlock_and_merge_sequence() {
  let state = ActorState::default();
  let kill_signals: Signals = [Signal::Kill, Signal::Wakeup, Signal::Cpu].into_iter().collect();

  let mut locker_a = ActorLocker::new(&state);
  let mut locker_b = ActorLocker::new(&state);
  let mut locker_c = ActorLocker::new(&state);

  assert!(locker_a.try_lock());
  assert!(locker_a.own_lock());
  let flags_a = locker_a.flags();
  assert!(locker_a.try_unlock(flags_a));
  assert!(!locker_a.own_lock());

  assert!(locker_a.try_lock());
  assert!(!locker_b.try_lock());
  assert!(!locker_c.try_lock());

  assert!(locker_b.try_add_signals(kill_signals));
  // C still holds the pre-merge snapshot, so the first attempt must fail.
  assert!(!locker_c.try_add_signals(Signals::one(Signal::Alarm)));
  assert!(locker_c.try_add_signals(Signals::one(Signal::Alarm)));
  assert!(!locker_c.add_signals(Signals::one(Signal::Message)));

  assert!(!locker_a.flags().has_signals());
  assert!(!locker_a.try_unlock(locker_a.flags()));
  assert!(locker_a.own_lock());
  assert_eq!(collect(locker_a.flags().signals()), [
    Signal::Wakeup,
    Signal::Alarm,
    Signal::Kill,
    Signal::Cpu,
    Signal::Message
  ]);

  let mut flags = locker_a.flags();
  flags.clear_signals();
  assert!(locker_a.try_unlock(flags));
  assert_eq!(state.flags_relaxed(), ActorStateFlags::new());
}

#[test]
fn merged_signals_are_not_lost_across_repeated_unlock_failures() {
  let state = ActorState::default();
  let kill = Signals::one(Signal::Kill);

  let mut locker_b = ActorLocker::new(&state);
  assert!(locker_b.try_lock());
  assert!(locker_b.try_unlock(locker_b.flags()));
  assert!(locker_b.add_signals(kill));
  assert!(locker_b.flags().signals().has_signal(Signal::Kill));

  let mut flags = locker_b.flags();
  flags.clear_signals();

  let mut locker_a = ActorLocker::new(&state);
  assert!(!locker_a.add_signals(kill));
  assert!(!locker_b.try_unlock(flags));
  assert!(!locker_a.add_signals(kill));
  assert!(!locker_b.try_unlock(flags));
  assert!(locker_b.flags().signals().has_signal(Signal::Kill));
  assert!(locker_b.try_unlock(flags));
  assert!(!state.flags_relaxed().is_locked());
}

#[test]
fn paused_but_unqueued_actor_is_still_locked_by_add_signals() {
  let state = ActorState::default();
  let mut locker = ActorLocker::new(&state);
  assert!(locker.try_lock());
  let mut flags = locker.flags();
  flags.set_pause(true);
  assert!(locker.try_unlock(flags));

  let mut locker = ActorLocker::new(&state);
  assert!(locker.add_signals(Signals::one(Signal::Wakeup)));
  assert!(!locker.can_execute());
}

#[test]
fn queued_actor_for_another_pool_only_receives_signals() {
  let mut initial = ActorStateFlags::new();
  initial.set_shared(false);
  initial.set_in_queue(true);
  let state = ActorState::new(initial);

  let mut locker = ActorLocker::new(&state);
  assert!(!locker.can_execute());
  assert!(!locker.try_lock());
  assert!(!locker.add_signals(Signals::one(Signal::Message)));
  assert!(state.flags_relaxed().signals().has_signal(Signal::Message));
  assert!(!state.flags_relaxed().is_locked());

  let mut owner = ActorLocker::with_options(&state, ActorLockerOptions::new().with_is_shared(false));
  assert!(owner.can_execute());
  assert!(owner.try_lock());
  assert!(owner.flags().signals().has_signal(Signal::Message));
}

#[test]
fn queued_paused_actor_is_executable_by_queue_worker_only() {
  let mut initial = ActorStateFlags::new();
  initial.set_shared(true);
  initial.set_in_queue(true);
  initial.set_pause(true);
  let state = ActorState::new(initial);

  let mut sender = ActorLocker::new(&state);
  assert!(!sender.try_lock());

  let mut worker = ActorLocker::with_options(&state, ActorLockerOptions::new().with_can_execute_paused(true));
  assert!(worker.can_execute());
  assert!(worker.try_lock());
}

#[test]
fn add_signals_on_idle_actor_needs_one_cas() {
  let mut initial = ActorStateFlags::new();
  initial.set_shared(true);
  initial.set_scheduler_id(SchedulerId::new(3));
  let state = ActorState::new(initial);

  let mut locker = ActorLocker::new(&state);
  assert!(locker.add_signals(Signals::one(Signal::Wakeup)));
  assert_eq!(locker.cas_attempts(), 1);
  assert!(locker.flags().signals().has_signal(Signal::Wakeup));
  assert_eq!(locker.flags().scheduler_id(), SchedulerId::new(3));
}

#[test]
#[should_panic(expected = "already owning")]
fn double_lock_panics() {
  let state = ActorState::default();
  let mut locker = ActorLocker::new(&state);
  assert!(locker.try_lock());
  let _ = locker.try_lock();
}

#[test]
#[should_panic(expected = "locked flags")]
fn unlocking_with_locked_flags_panics() {
  let state = ActorState::default();
  let mut locker = ActorLocker::new(&state);
  assert!(locker.try_lock());
  let mut flags = locker.flags();
  flags.set_locked(true);
  let _ = locker.try_unlock(flags);
}

#[test]
#[should_panic(expected = "without owning")]
fn unlocking_without_the_lock_panics() {
  let state = ActorState::default();
  let mut locker = ActorLocker::new(&state);
  let _ = locker.try_unlock(ActorStateFlags::new());
}

#[test]
#[should_panic(expected = "must be locked instead")]
fn try_add_signals_on_lockable_actor_panics() {
  let state = ActorState::default();
  let mut locker = ActorLocker::new(&state);
  let _ = locker.try_add_signals(Signals::one(Signal::Wakeup));
}

#[test]
fn wakeup_owner_sees_message_merged_by_second_thread() {
  let mut initial = ActorStateFlags::new();
  initial.set_shared(true);
  let state = Arc::new(ActorState::new(initial));

  let mut locker_a = ActorLocker::new(&state);
  assert!(locker_a.add_signals(Signals::one(Signal::Wakeup)));
  assert!(locker_a.own_lock());
  assert!(locker_a.flags().signals().has_signal(Signal::Wakeup));

  let (tx, rx) = mpsc::channel();
  let shared = Arc::clone(&state);
  let handle = thread::spawn(move || {
    let mut locker_b = ActorLocker::new(&shared);
    let owned = locker_b.add_signals(Signals::one(Signal::Message));
    tx.send((owned, locker_b.own_lock())).unwrap();
  });
  let (owned, own_lock) = rx.recv().unwrap();
  handle.join().unwrap();
  assert!(!owned);
  assert!(!own_lock);

  let mut cleared = locker_a.flags();
  cleared.clear_signals();
  assert!(!locker_a.try_unlock(cleared));
  assert_eq!(collect(locker_a.flags().signals()), [Signal::Message]);

  assert!(locker_a.try_unlock(locker_a.flags()));
  assert!(state.flags_relaxed().signals().has_signal(Signal::Message));
}

#[test]
fn signals_added_while_locked_are_published_as_a_union() {
  let state = Arc::new(ActorState::default());
  let mut owner = ActorLocker::new(&state);
  assert!(owner.try_lock());

  let barrier = Arc::new(Barrier::new(Signal::ALL.len()));
  let handles: Vec<_> = Signal::ALL
    .into_iter()
    .map(|signal| {
      let state = Arc::clone(&state);
      let barrier = Arc::clone(&barrier);
      thread::spawn(move || {
        barrier.wait();
        let mut locker = ActorLocker::new(&state);
        assert!(!locker.add_signals(Signals::one(signal)));
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }

  let mut cleared = owner.flags();
  cleared.clear_signals();
  assert!(!owner.try_unlock(cleared));
  assert_eq!(owner.flags().signals(), Signals::from_raw(u32::MAX));
  let mut cleared = owner.flags();
  cleared.clear_signals();
  assert!(owner.try_unlock(cleared));
}

fn drain(locker: &mut ActorLocker<'_>, inside: &AtomicUsize, pending: &[AtomicBool]) {
  loop {
    let mut flags = locker.flags();
    let previous = inside.fetch_add(1, Ordering::SeqCst);
    assert_eq!(previous, 0, "two threads own the same actor");
    for signal in flags.signals() {
      pending[signal.index() as usize].store(false, Ordering::SeqCst);
    }
    thread::yield_now();
    inside.fetch_sub(1, Ordering::SeqCst);
    flags.clear_signals();
    if locker.try_unlock(flags) {
      return;
    }
  }
}

#[test]
fn contended_add_signals_keeps_mutual_exclusion_and_loses_nothing() {
  const ROUNDS: usize = 2_000;

  let mut initial = ActorStateFlags::new();
  initial.set_shared(true);
  let state = Arc::new(ActorState::new(initial));
  let inside = Arc::new(AtomicUsize::new(0));
  let pending: Arc<Vec<AtomicBool>> = Arc::new((0..=Signal::ALL.len()).map(|_| AtomicBool::new(false)).collect());
  let barrier = Arc::new(Barrier::new(Signal::ALL.len()));

  let handles: Vec<_> = Signal::ALL
    .into_iter()
    .map(|signal| {
      let state = Arc::clone(&state);
      let inside = Arc::clone(&inside);
      let pending = Arc::clone(&pending);
      let barrier = Arc::clone(&barrier);
      thread::spawn(move || {
        barrier.wait();
        for _ in 0..ROUNDS {
          pending[signal.index() as usize].store(true, Ordering::SeqCst);
          let mut locker = ActorLocker::new(&state);
          if locker.add_signals(Signals::one(signal)) {
            drain(&mut locker, &inside, &pending);
          }
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }

  let last = state.flags_relaxed();
  assert!(!last.is_locked());
  assert!(!last.has_signals());
  for signal in Signal::ALL {
    assert!(!pending[signal.index() as usize].load(Ordering::SeqCst), "{signal} was lost");
  }
}

#[test]
fn unlock_retry_converges_under_constant_injection() {
  const INJECTORS: usize = 4;
  const CYCLES: usize = 5_000;

  let state = Arc::new(ActorState::default());
  let stop = Arc::new(AtomicBool::new(false));
  let injected = Arc::new(AtomicUsize::new(0));

  let injectors: Vec<_> = (0..INJECTORS)
    .map(|i| {
      let state = Arc::clone(&state);
      let stop = Arc::clone(&stop);
      let injected = Arc::clone(&injected);
      thread::spawn(move || {
        let signal = Signal::ALL[i];
        loop {
          let mut locker = ActorLocker::new(&state);
          if locker.add_signals(Signals::one(signal)) {
            // Won an idle actor: hand it back untouched, keeping the signal pending.
            while !locker.try_unlock(locker.flags()) {}
          }
          injected.fetch_add(1, Ordering::Relaxed);
          if stop.load(Ordering::Acquire) {
            break;
          }
        }
      })
    })
    .collect();

  let mut seen = Signals::new();
  let mut retries = 0_usize;
  for _ in 0..CYCLES {
    let mut locker = ActorLocker::new(&state);
    if !locker.try_lock() {
      continue;
    }
    loop {
      let mut flags = locker.flags();
      seen.add_signals(flags.signals());
      flags.clear_signals();
      if locker.try_unlock(flags) {
        break;
      }
      retries += 1;
    }
  }
  stop.store(true, Ordering::Release);
  for handle in injectors {
    handle.join().unwrap();
  }

  let mut locker = ActorLocker::new(&state);
  if locker.try_lock() {
    seen.add_signals(locker.flags().signals());
    let mut flags = locker.flags();
    flags.clear_signals();
    assert!(locker.try_unlock(flags));
  }
  assert!(injected.load(Ordering::Relaxed) > 0);
  for signal in Signal::ALL.into_iter().take(INJECTORS) {
    assert!(seen.has_signal(signal), "{signal} never observed after {retries} retries");
  }
}
