#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![deny(clippy::print_stdout, clippy::dbg_macro)]
#![deny(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![deny(unreachable_pub)]

//! Thread-backed scheduler group for the strand actor core.
//!
//! A [`SchedulerGroup`] runs one or more schedulers. Each scheduler serves shared
//! actors from a lock-free queue with a pool of CPU workers, and pinned actors plus
//! alarms from a dedicated owner thread. [`SchedulerContext`] is the
//! [`SchedulerDispatcher`](strand_actor_core_rs::SchedulerDispatcher) those threads
//! and any outside thread use to reach actors.

mod alarm_table;
mod config_error;
mod cpu_worker;
mod group_shared;
mod owner_state;
mod owner_worker;
mod scheduler_config;
mod scheduler_context;
mod scheduler_error;
mod scheduler_group;
mod scheduler_group_config;
mod scheduler_queues;
mod worker_waiter;

pub use config_error::ConfigError;
pub use scheduler_config::SchedulerConfig;
pub use scheduler_context::SchedulerContext;
pub use scheduler_error::SchedulerError;
pub use scheduler_group::SchedulerGroup;
pub use scheduler_group_config::SchedulerGroupConfig;

/// `tracing` target of every event emitted by this crate.
pub const LOG_TARGET: &str = "strand::scheduler";
