//! Change tracker
//!
//! Records the cumulative difference between a baseline text and its current
//! state as an ordered list of [`ModificationSpan`]s, without ever storing the
//! text itself.
//!
//! # Example
//!
//! ```rust
//! use retrace_core::ChangeTracker;
//!
//! // "abcdef" -> "abXYZef"
//! let mut tracker = ChangeTracker::new();
//! tracker.apply(1, 2, 2, 3);
//!
//! let edits = tracker.edits();
//! assert_eq!(edits.len(), 1);
//! assert_eq!(edits[0].orig_range(), 2..4);
//! assert_eq!(edits[0].range(), 2..5);
//!
//! assert_eq!(tracker.translate(0, 6), (0, 7));
//! ```

mod apply;
mod snapshot;
mod translate;

#[cfg(test)]
mod tests;

pub use snapshot::TrackerSnapshot;

use tracing::{debug, trace};

use crate::span::{ModificationSpan, offset_by};
use crate::view::EditView;

/// Ordered, non-overlapping set of modification spans plus the last edit id
///
/// Exactly one writer may call [`ChangeTracker::apply`]; reads in between
/// writes are always consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    spans: Vec<ModificationSpan>,
    seq: u64,
}

impl ChangeTracker {
    /// Create an empty tracker: no recorded difference
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the last applied edit
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Tracked spans, sorted by start
    pub fn spans(&self) -> &[ModificationSpan] {
        &self.spans
    }

    /// Number of tracked spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sum of every span's local shift: `len(baseline) - len(current)`
    pub fn net_shift(&self) -> isize {
        self.spans.iter().map(ModificationSpan::local_shift).sum()
    }

    /// Fold another tracker's edits into this one
    ///
    /// Both trackers must share a baseline. Spans are replayed left to right,
    /// so each span's `start` is already correct in the partially merged
    /// coordinate space. Sequence ordering across trackers is the caller's
    /// responsibility; `seq` ends as the last replayed span's id.
    pub fn merge(&mut self, other: &ChangeTracker) {
        trace!(
            spans = self.spans.len(),
            incoming = other.spans.len(),
            "merging trackers"
        );
        for span in &other.spans {
            self.apply(span.seq, span.start, span.orig_length, span.length);
        }
    }

    /// Declare the current text the new baseline
    ///
    /// Every span becomes a shift-free marker so recently touched regions
    /// still group into chunks.
    pub fn advance(&mut self) {
        let mut rebased = 0;
        for span in self.spans.iter_mut().filter(|span| !span.is_shift_free()) {
            span.orig_length = span.length;
            rebased += 1;
        }
        debug!(
            spans = self.spans.len(),
            rebased,
            seq = self.seq,
            "advanced baseline"
        );
    }

    /// Every span seen from both coordinate spaces
    pub fn edits(&self) -> Vec<EditView> {
        let mut shift = 0isize;
        self.spans
            .iter()
            .map(|span| {
                let view = EditView {
                    seq: span.seq,
                    start: span.start,
                    length: span.length,
                    orig_start: offset_by(span.start, shift),
                    orig_length: span.orig_length,
                };
                shift += span.local_shift();
                view
            })
            .collect()
    }
}
