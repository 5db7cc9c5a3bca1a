//! Text edit events

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One discrete edit against the current text
///
/// Offsets are UTF-8 byte offsets into the document as it stands when the
/// edit is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Where the edit starts
    pub offset: usize,
    /// Bytes removed at `offset`
    pub removed: usize,
    /// Text inserted in their place
    pub inserted: String,
}

impl TextEdit {
    /// Insert `text` at `offset`
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            removed: 0,
            inserted: text.into(),
        }
    }

    /// Delete `range`
    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, "")
    }

    /// Replace `range` with `text`
    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            offset: range.start,
            removed: range.end.saturating_sub(range.start),
            inserted: text.into(),
        }
    }

    /// End of the removed range
    pub fn end(&self) -> usize {
        self.offset + self.removed
    }
}
