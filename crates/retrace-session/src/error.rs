//! Session error types

use retrace_core::TrackerError;
use thiserror::Error;

/// Tracked document errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Edit range ends at {offset}, past document length {len}")]
    OutOfBounds { offset: usize, len: usize },

    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    #[error("Snapshot does not match its text: {0}")]
    SnapshotMismatch(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
