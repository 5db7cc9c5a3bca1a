//! Diff slices for tracked regions and display chunks

use retrace_core::EditView;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A tracked region with the text on both sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDiff {
    pub view: EditView,
    /// Baseline text the region replaced
    pub original: String,
    /// Current text occupying the region
    pub replacement: String,
}

impl EditDiff {
    pub(super) fn slice(view: EditView, baseline: &str, current: &str) -> Self {
        Self {
            view,
            original: slice_chars(baseline, view.orig_range()).to_string(),
            replacement: slice_chars(current, view.range()).to_string(),
        }
    }

    /// Whether the region holds different text than the baseline did
    pub fn is_changed(&self) -> bool {
        self.original != self.replacement
    }
}

/// A widened display chunk with the text on both sides
///
/// Chunk bounds come from byte arithmetic; both slices are pulled back to the
/// nearest character boundary so multi-byte text never splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDiff {
    pub view: EditView,
    pub original: String,
    pub current: String,
}

impl ChunkDiff {
    pub(super) fn slice(view: EditView, baseline: &str, current: &str) -> Self {
        Self {
            view,
            original: slice_chars(baseline, view.orig_range()).to_string(),
            current: slice_chars(current, view.range()).to_string(),
        }
    }

    /// Whether the chunk shows any difference
    pub fn is_changed(&self) -> bool {
        self.original != self.current
    }
}

/// Slice `text`, moving both ends down to character boundaries
fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = floor_char_boundary(text, range.start);
    let end = floor_char_boundary(text, range.end).max(start);
    &text[start..end]
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
