//! Chunk extraction configuration

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Default display window for a chunk, in current-text characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1_000;

/// Configuration for chunk extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Target size of a widened chunk; groups longer than this are split
    pub max_chunk_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl ChunkConfig {
    /// Create config with a specific chunk size
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// Set max chunk size
    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Parse and validate config from TOML text
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(content: &str) -> TrackerResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable
    pub fn validate(&self) -> TrackerResult<()> {
        if self.max_chunk_size == 0 {
            return Err(TrackerError::config("max_chunk_size must be greater than zero"));
        }
        Ok(())
    }
}
