use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the record stores and their backing files.
///
/// "Not found" is deliberately absent: lookups and removals report misses
/// through `Option`/`bool` results, never through this enum.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("a record with id `{0}` already exists")]
    DuplicateId(String),

    #[error("unknown update field `{0}`")]
    UnknownField(String),

    #[error("invalid record payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("backing file {} is malformed: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("backing file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
