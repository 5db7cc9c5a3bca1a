//! Retrace
//!
//! Incremental edit tracking for text documents. Records how a text drifts
//! from its baseline one edit at a time, then answers "where did things
//! change" and "where did this position go" without re-diffing.
//!
//! ```rust
//! use retrace::{ChunkConfig, TrackedDocument};
//!
//! let mut doc = TrackedDocument::new("let x = 1;\nlet y = 2;\n");
//! doc.replace(8..9, "42").unwrap();
//!
//! for chunk in doc.chunk_diffs(&ChunkConfig::new(16)) {
//!     assert!(chunk.original.contains("= 1"));
//!     assert!(chunk.current.contains("= 42"));
//! }
//! ```

pub use retrace_core::{
    ChangeTracker, ChunkConfig, DEFAULT_MAX_CHUNK_SIZE, EditView, ModificationSpan, TrackerError,
    TrackerResult, TrackerSnapshot,
};
pub use retrace_session::{
    ChunkDiff, DocumentSnapshot, EditDiff, SessionError, SessionResult, TextEdit, TrackedDocument,
};
