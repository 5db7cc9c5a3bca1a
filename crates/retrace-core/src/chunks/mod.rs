//! Chunk extraction for diff and preview display
//!
//! Spans are first grouped into chunks that fit a display window, then each
//! chunk is widened with surrounding context up to that window. The result is
//! sorted, non-overlapping, and covers every tracked span.
//!
//! # Example
//!
//! ```rust
//! use retrace_core::{ChangeTracker, ChunkConfig};
//!
//! let mut tracker = ChangeTracker::new();
//! tracker.apply(1, 10, 0, 2);
//! tracker.apply(2, 90, 1, 1);
//!
//! let config = ChunkConfig::new(20);
//! let chunks = tracker.chunks_with(&config, 200);
//! assert_eq!(chunks.len(), 2);
//! assert!(chunks.iter().all(|c| c.length == 20));
//! ```

mod group;
mod widen;


use crate::config::ChunkConfig;
use crate::tracker::ChangeTracker;
use crate::view::EditView;

impl ChangeTracker {
    /// Padded, display-sized regions covering every span
    ///
    /// `total_length` is the length of the current text; chunks never extend
    /// past it. A `max_chunk_size` of zero is treated as one.
    pub fn chunks(&self, max_chunk_size: usize, total_length: usize) -> Vec<EditView> {
        let max_chunk_size = max_chunk_size.max(1);
        let grouped = group::group(&self.edits(), max_chunk_size);
        widen::widen(&grouped, max_chunk_size, total_length)
    }

    /// Number of chunks [`ChangeTracker::chunks`] groups spans into
    pub fn count_chunks(&self, max_chunk_size: usize) -> usize {
        group::group(&self.edits(), max_chunk_size.max(1)).len()
    }

    /// [`ChangeTracker::chunks`] using a config
    pub fn chunks_with(&self, config: &ChunkConfig, total_length: usize) -> Vec<EditView> {
        self.chunks(config.max_chunk_size, total_length)
    }

    /// [`ChangeTracker::count_chunks`] using a config
    pub fn count_chunks_with(&self, config: &ChunkConfig) -> usize {
        self.count_chunks(config.max_chunk_size)
    }
}
