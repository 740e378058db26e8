use thiserror::Error;

/// Why a single raw record did not become a track
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record has no {0}")]
    MissingField(&'static str),

    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}
