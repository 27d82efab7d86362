use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{StoreError, StoreResult};

/// JSON file mirror for one record collection.
///
/// `save` rewrites the whole backing file on every call; `load` reads it
/// back once at store startup. A missing file is the normal empty state,
/// not an error. At most one attempt per operation, no retries.
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save<R: Serialize>(&self, records: &[R]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "flushed collection");
        Ok(())
    }

    pub fn load<R: DeserializeOwned>(&self) -> StoreResult<Vec<R>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let records =
            serde_json::from_str(&content).map_err(|source| StoreError::MalformedData {
                path: self.path.clone(),
                source,
            })?;
        Ok(records)
    }
}
