//! Errors reported while validating a scheduler group configuration.

use core::fmt;

/// Invalid [`SchedulerGroupConfig`](crate::SchedulerGroupConfig) settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
  /// No scheduler was configured.
  NoSchedulers,
  /// More schedulers than scheduler ids exist.
  TooManySchedulers {
    /// Number of schedulers requested.
    requested: usize,
    /// Largest supported number of schedulers.
    max:       usize,
  },
  /// Worker threads need a non-empty name prefix.
  EmptyThreadNamePrefix,
  /// The owner idle timeout must be positive.
  ZeroIdleTimeout,
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NoSchedulers => f.write_str("at least one scheduler is required"),
      | Self::TooManySchedulers { requested, max } => {
        write!(f, "{requested} schedulers requested, at most {max} are supported")
      },
      | Self::EmptyThreadNamePrefix => f.write_str("thread name prefix must not be empty"),
      | Self::ZeroIdleTimeout => f.write_str("owner idle timeout must be positive"),
    }
  }
}

impl std::error::Error for ConfigError {}
