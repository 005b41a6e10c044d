#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::manual_assert)]
#![no_std]

//! Lock-free actor core.
//!
//! Every actor owns one 32-bit state word packing its scheduler id, lifecycle
//! flags and a set of pending [`Signal`]s. [`ActorLocker`] arbitrates that word with
//! compare-and-swap only: one thread wins exclusive ownership and drains the actor,
//! every other thread merges its signals into the word and walks away.
//!
//! On top of the word, [`ActorExecutor`] runs one pass of work over an
//! [`ActorInfo`] and hands left-over work to a [`SchedulerDispatcher`], the seam a
//! runtime implements to provide run queues, alarms and a clock.

extern crate alloc;
#[cfg(test)]
extern crate std;

mod actor;
mod actor_context;
mod actor_executor;
mod actor_info;
mod actor_locker;
mod actor_locker_options;
mod actor_mailbox;
mod actor_message;
mod actor_options;
mod actor_own;
mod actor_ref;
mod actor_slot;
mod actor_state;
mod actor_state_flags;
mod executor_options;
mod scheduled_actor;
mod scheduler_dispatcher;
mod scheduler_id;
mod signal;
mod signals;
mod signals_iter;

pub use actor::Actor;
pub use actor_context::{ActorContext, EMPTY_LINK_TOKEN};
pub use actor_executor::ActorExecutor;
pub use actor_info::ActorInfo;
pub use actor_locker::ActorLocker;
pub use actor_locker_options::ActorLockerOptions;
pub use actor_mailbox::ActorMailbox;
pub use actor_message::ActorMessage;
pub use actor_options::ActorOptions;
pub use actor_own::ActorOwn;
pub use actor_ref::ActorRef;
pub use actor_state::ActorState;
pub use actor_state_flags::ActorStateFlags;
pub use executor_options::ExecutorOptions;
pub use scheduled_actor::{ActorHandle, ScheduledActor};
pub use scheduler_dispatcher::SchedulerDispatcher;
pub use scheduler_id::SchedulerId;
pub use signal::Signal;
pub use signals::Signals;
pub use signals_iter::SignalsIter;
