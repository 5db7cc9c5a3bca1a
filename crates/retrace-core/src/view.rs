//! Read-only projection of a span in both coordinate spaces

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{TrackerError, TrackerResult};

/// A span as seen from both the baseline and the current text
///
/// Produced by `ChangeTracker::edits` and by chunk extraction. `orig_start` is
/// derived from the spans that precede this one and is never stored inside
/// the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditView {
    pub seq: u64,
    pub start: usize,
    pub length: usize,
    pub orig_start: usize,
    pub orig_length: usize,
}

impl EditView {
    /// End in current text (exclusive)
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// End in baseline text (exclusive)
    pub const fn orig_end(&self) -> usize {
        self.orig_start + self.orig_length
    }

    /// Range to slice from the current text
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Range to slice from the baseline text
    pub const fn orig_range(&self) -> Range<usize> {
        self.orig_start..self.orig_end()
    }

    /// Move the start, keeping the end fixed in both coordinate spaces
    ///
    /// Moving left pulls in untouched text, so both lengths grow by the same
    /// amount and `orig_start` moves with `start`.
    pub fn set_start(&mut self, start: usize) -> TrackerResult<()> {
        let delta = self.start as isize - start as isize;
        let length = self.length.checked_add_signed(delta);
        let orig_length = self.orig_length.checked_add_signed(delta);
        let orig_start = self.orig_start.checked_add_signed(-delta);
        match (length, orig_length, orig_start) {
            (Some(length), Some(orig_length), Some(orig_start)) => {
                self.start = start;
                self.length = length;
                self.orig_start = orig_start;
                self.orig_length = orig_length;
                Ok(())
            }
            _ => Err(self.inconsistent(delta)),
        }
    }

    /// Move the end, keeping the start fixed in both coordinate spaces
    pub fn set_end(&mut self, end: usize) -> TrackerResult<()> {
        let delta = end as isize - self.end() as isize;
        let length = self.length.checked_add_signed(delta);
        let orig_length = self.orig_length.checked_add_signed(delta);
        match (length, orig_length) {
            (Some(length), Some(orig_length)) => {
                self.length = length;
                self.orig_length = orig_length;
                Ok(())
            }
            _ => Err(self.inconsistent(delta)),
        }
    }

    fn inconsistent(&self, delta: isize) -> TrackerError {
        TrackerError::InconsistentChunk {
            start: self.start,
            orig_start: self.orig_start,
            orig_length: self.orig_length,
            delta,
        }
    }
}
