//! Serializable document state

use retrace_core::{ChangeTracker, TrackerSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TrackedDocument;
use crate::error::{SessionError, SessionResult};

/// Baseline, current text and tracker state of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub baseline: String,
    pub current: String,
    pub next_seq: u64,
    pub tracker: TrackerSnapshot,
}

impl TrackedDocument {
    /// Capture everything needed to resume tracking later
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            baseline: self.baseline.clone(),
            current: self.current.clone(),
            next_seq: self.next_seq,
            tracker: self.tracker.snapshot(),
        }
    }
}

impl DocumentSnapshot {
    /// Rebuild the document, checking the tracker agrees with the text
    pub fn restore(self) -> SessionResult<TrackedDocument> {
        let tracker = ChangeTracker::from_snapshot(self.tracker)?;

        let expected = self.baseline.len() as isize - self.current.len() as isize;
        if tracker.net_shift() != expected {
            return Err(SessionError::SnapshotMismatch(format!(
                "tracker shift {} but text lengths differ by {}",
                tracker.net_shift(),
                expected
            )));
        }
        if let Some(last) = tracker.spans().last() {
            if last.end() > self.current.len() {
                return Err(SessionError::SnapshotMismatch(format!(
                    "span ends at {} past document length {}",
                    last.end(),
                    self.current.len()
                )));
            }
        }

        debug!(
            spans = tracker.len(),
            next_seq = self.next_seq,
            "restored document"
        );
        Ok(TrackedDocument {
            baseline: self.baseline,
            current: self.current,
            next_seq: self.next_seq.max(tracker.seq() + 1),
            tracker,
        })
    }
}
