//! Save data types
//!
//! Serialized to JSON with Serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The persisted state of one save slot
///
/// Only `seed` is interpreted. Any other fields found in a file (for
/// example from hand editing) are kept in `extra` untouched and written
/// back when the record is saved again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveRecord {
    pub seed: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SaveRecord {
    pub fn new(seed: impl Into<String>) -> Self {
        SaveRecord {
            seed: seed.into(),
            extra: Map::new(),
        }
    }
}

/// Error types for save/load operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found: {0}")]
    NotFound(String),
}
