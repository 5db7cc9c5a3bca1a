//! Error types for the change tracker

use thiserror::Error;

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Recoverable tracker failures
///
/// Contract violations inside `ChangeTracker::apply` are not represented here;
/// they are programming errors and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A restored span list is unsorted or overlapping
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Configuration values out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration text could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// Widening would move a chunk outside the baseline coordinate space
    #[error(
        "Inconsistent chunk at {start}: baseline range {orig_start}+{orig_length} cannot move by {delta}"
    )]
    InconsistentChunk {
        start: usize,
        orig_start: usize,
        orig_length: usize,
        delta: isize,
    },
}

impl TrackerError {
    /// Create a new invalid snapshot error
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for TrackerError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse(error.to_string())
    }
}
