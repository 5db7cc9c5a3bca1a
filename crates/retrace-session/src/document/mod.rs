//! Tracked document
//!
//! Pairs a baseline and current text with a [`ChangeTracker`], feeding it one
//! `apply` per edit and slicing both texts for diff display.
//!
//! # Example
//!
//! ```rust
//! use retrace_session::{TextEdit, TrackedDocument};
//!
//! let mut doc = TrackedDocument::new("abcdef");
//! doc.apply_edit(TextEdit::replace(2..4, "XYZ")).unwrap();
//!
//! assert_eq!(doc.current(), "abXYZef");
//! let diffs = doc.diffs();
//! assert_eq!(diffs[0].original, "cd");
//! assert_eq!(diffs[0].replacement, "XYZ");
//! ```

mod diff;
mod snapshot;


pub use diff::{ChunkDiff, EditDiff};
pub use snapshot::DocumentSnapshot;

use retrace_core::{ChangeTracker, ChunkConfig};
use std::ops::Range;
use tracing::{debug, trace};

use crate::edit::TextEdit;
use crate::error::{SessionError, SessionResult};

/// A document whose edits are tracked against a baseline
#[derive(Debug, Clone)]
pub struct TrackedDocument {
    baseline: String,
    current: String,
    tracker: ChangeTracker,
    next_seq: u64,
}

impl TrackedDocument {
    /// Start tracking `text` as both baseline and current state
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            baseline: text.clone(),
            current: text,
            tracker: ChangeTracker::new(),
            next_seq: 1,
        }
    }

    /// Text as of the last checkpoint
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Text with every edit applied
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The underlying tracker
    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// Length of the current text in bytes
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the current text is empty
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Whether the current text differs from the baseline
    pub fn is_modified(&self) -> bool {
        self.baseline != self.current
    }

    /// Apply one edit, returning the sequence number it was recorded under
    pub fn apply_edit(&mut self, edit: TextEdit) -> SessionResult<u64> {
        let end = edit.end();
        if end > self.current.len() {
            return Err(SessionError::OutOfBounds {
                offset: end,
                len: self.current.len(),
            });
        }
        for offset in [edit.offset, end] {
            if !self.current.is_char_boundary(offset) {
                return Err(SessionError::NotCharBoundary(offset));
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.current.replace_range(edit.offset..end, &edit.inserted);
        self.tracker.apply(seq, edit.offset, edit.removed, edit.inserted.len());
        trace!(seq, offset = edit.offset, spans = self.tracker.len(), "tracked edit");
        Ok(seq)
    }

    /// Insert `text` at `offset`
    pub fn insert(&mut self, offset: usize, text: &str) -> SessionResult<u64> {
        self.apply_edit(TextEdit::insert(offset, text))
    }

    /// Delete `range`
    pub fn delete(&mut self, range: Range<usize>) -> SessionResult<u64> {
        self.apply_edit(TextEdit::delete(range))
    }

    /// Replace `range` with `text`
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> SessionResult<u64> {
        self.apply_edit(TextEdit::replace(range, text))
    }

    /// Re-anchor a baseline range onto the current text
    pub fn resolve(&self, start: usize, length: usize) -> (usize, usize) {
        self.tracker.translate(start, length)
    }

    /// Every tracked region with its baseline and current text
    pub fn diffs(&self) -> Vec<EditDiff> {
        self.tracker
            .edits()
            .into_iter()
            .map(|view| EditDiff::slice(view, &self.baseline, &self.current))
            .collect()
    }

    /// Display chunks with surrounding context, sliced from both texts
    pub fn chunk_diffs(&self, config: &ChunkConfig) -> Vec<ChunkDiff> {
        self.tracker
            .chunks_with(config, self.current.len())
            .into_iter()
            .map(|view| ChunkDiff::slice(view, &self.baseline, &self.current))
            .collect()
    }

    /// Make the current text the new baseline
    ///
    /// Tracked regions survive as shift-free markers so chunking still finds
    /// recently touched text.
    pub fn checkpoint(&mut self) {
        self.tracker.advance();
        self.baseline.clone_from(&self.current);
        debug!(
            seq = self.tracker.seq(),
            spans = self.tracker.len(),
            "document checkpoint"
        );
    }
}
