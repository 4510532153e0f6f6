//! Publication data error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading publication records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Publications JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Publications JSON must be an array of objects")]
    NotAnArray,

    #[error("publication at index {index} is not an object")]
    NotAnObject { index: usize },

    #[error("publication at index {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("publication `{id}` (index {index}) has an invalid field")]
    Invalid {
        index: usize,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("publication id `{0}` is not a safe file name")]
    UnsafeId(String),

    #[error("duplicate publication id `{0}`")]
    DuplicateId(String),
}

impl RecordError {
    /// Whether the error concerns a single record and can be skipped.
    pub const fn is_record_level(&self) -> bool {
        matches!(
            self,
            Self::NotAnObject { .. }
                | Self::MissingField { .. }
                | Self::Invalid { .. }
                | Self::UnsafeId(_)
        )
    }
}
