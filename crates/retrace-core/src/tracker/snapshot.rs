//! Serializable tracker state

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChangeTracker;
use crate::error::{TrackerError, TrackerResult};
use crate::span::ModificationSpan;

/// Everything needed to rebuild a tracker: the span list and last edit id
///
/// The crate picks no storage format; serialize this with any serde backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub seq: u64,
    #[serde(default)]
    pub spans: Vec<ModificationSpan>,
}

impl ChangeTracker {
    /// Capture the current state
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            seq: self.seq,
            spans: self.spans.clone(),
        }
    }

    /// Rebuild a tracker, rejecting span lists `apply` could never produce
    pub fn from_snapshot(snapshot: TrackerSnapshot) -> TrackerResult<Self> {
        for (index, pair) in snapshot.spans.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.end() {
                return Err(TrackerError::invalid_snapshot(format!(
                    "span {} starts at {} inside previous span ending at {}",
                    index + 1,
                    next.start,
                    prev.end()
                )));
            }
        }

        debug!(
            spans = snapshot.spans.len(),
            seq = snapshot.seq,
            "restored tracker"
        );
        Ok(Self {
            spans: snapshot.spans,
            seq: snapshot.seq,
        })
    }
}

impl TryFrom<TrackerSnapshot> for ChangeTracker {
    type Error = TrackerError;

    fn try_from(snapshot: TrackerSnapshot) -> TrackerResult<Self> {
        Self::from_snapshot(snapshot)
    }
}
