use core::time::Duration;

use strand_actor_core_rs::SchedulerId;

use super::SchedulerGroupConfig;
use crate::{ConfigError, SchedulerConfig};

#[test]
fn default_configuration_is_valid() {
  let config = SchedulerGroupConfig::default();
  assert_eq!(config.schedulers().len(), 1);
  assert!(config.schedulers()[0].cpu_threads() >= 1);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn builder_overrides_each_setting() {
  let config = SchedulerGroupConfig::new()
    .with_scheduler(SchedulerConfig::new(2))
    .with_scheduler(SchedulerConfig::new(0))
    .with_thread_name_prefix("io")
    .with_spin_limit(3)
    .with_owner_idle_timeout(Duration::from_millis(5));

  assert_eq!(config.schedulers(), &[SchedulerConfig::new(2), SchedulerConfig::new(0)]);
  assert_eq!(config.thread_name_prefix(), "io");
  assert_eq!(config.spin_limit(), 3);
  assert_eq!(config.owner_idle_timeout(), Duration::from_millis(5));
  assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_empty_group() {
  assert_eq!(SchedulerGroupConfig::new().validate(), Err(ConfigError::NoSchedulers));
}

#[test]
fn validate_rejects_more_schedulers_than_ids() {
  let schedulers = vec![SchedulerConfig::new(0); SchedulerId::CAPACITY + 1];
  let error = SchedulerGroupConfig::new().with_schedulers(schedulers).validate().unwrap_err();
  assert_eq!(error, ConfigError::TooManySchedulers { requested: 256, max: 255 });
  assert_eq!(error.to_string(), "256 schedulers requested, at most 255 are supported");
}

#[test]
fn validate_rejects_empty_prefix_and_zero_timeout() {
  let base = SchedulerGroupConfig::default();
  assert_eq!(base.clone().with_thread_name_prefix("").validate(), Err(ConfigError::EmptyThreadNamePrefix));
  assert_eq!(base.with_owner_idle_timeout(Duration::ZERO).validate(), Err(ConfigError::ZeroIdleTimeout));
}
