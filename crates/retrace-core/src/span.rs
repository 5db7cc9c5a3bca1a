//! Modification span: one tracked region of difference

use serde::{Deserialize, Serialize};

/// One region where current text differs from the baseline
///
/// `start` and `length` are in current-text coordinates; `orig_length` is the
/// length of the baseline text this region replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModificationSpan {
    /// Id of the last edit that touched this region
    pub seq: u64,
    /// Position in current text
    pub start: usize,
    /// Length in current text
    pub length: usize,
    /// Length of the corresponding baseline text
    pub orig_length: usize,
}

impl ModificationSpan {
    /// Create a new span
    pub const fn new(seq: u64, start: usize, length: usize, orig_length: usize) -> Self {
        Self {
            seq,
            start,
            length,
            orig_length,
        }
    }

    /// End of the span in current text (exclusive)
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Signed displacement the baseline carries relative to current text here
    pub const fn local_shift(&self) -> isize {
        self.orig_length as isize - self.length as isize
    }

    /// Whether the span neither adds nor removes characters
    pub const fn is_shift_free(&self) -> bool {
        self.orig_length == self.length
    }
}

/// Move `position` by a signed `delta`, clamping at zero
pub(crate) fn offset_by(position: usize, delta: isize) -> usize {
    position.saturating_add_signed(delta)
}
