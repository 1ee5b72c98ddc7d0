// 3rd party crates
use thiserror::Error;

/// Errors raised while loading or validating the daemon configuration.
/// All of these are fatal: the process refuses to start without a
/// complete configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read configuration from environment: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} is required and must not be empty")]
    MissingRequired(&'static str),

    #[error("SLEEP_TIME must be greater than 0, got {0}")]
    InvalidSleepTime(u64),

    #[error("RECORD_NAMES must contain at least one record name")]
    NoRecordNames,
}
