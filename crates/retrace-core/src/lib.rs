//! Retrace core library
//!
//! This crate provides the change tracker: a compact record of how a text has
//! drifted from its baseline, built one edit at a time. It answers
//! coordinate-translation and "where did things change" queries without
//! storing or re-diffing the text itself.
//!
//! - [`ChangeTracker`]: apply, merge, advance, translate, edits, chunks
//! - [`ModificationSpan`]: one tracked region of difference
//! - [`EditView`]: a span seen from both baseline and current text
//! - [`ChunkConfig`]: display window for chunk extraction

mod chunks;
pub mod config;
pub mod error;
pub mod span;
pub mod tracker;
pub mod view;

pub use config::{ChunkConfig, DEFAULT_MAX_CHUNK_SIZE};
pub use error::{TrackerError, TrackerResult};
pub use span::ModificationSpan;
pub use tracker::{ChangeTracker, TrackerSnapshot};
pub use view::EditView;
