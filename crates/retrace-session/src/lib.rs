//! Tracked documents for Retrace
//!
//! This crate sits on both sides of the change tracker:
//! - Edit source: validates and applies text edits, one tracker `apply` each
//! - Diff consumer: slices baseline and current text for tracked regions
//!   and display chunks
//! - Checkpoints and serde snapshots of document state

pub mod document;
pub mod edit;
pub mod error;

pub use document::{ChunkDiff, DocumentSnapshot, EditDiff, TrackedDocument};
pub use edit::TextEdit;
pub use error::{SessionError, SessionResult};
