//! JSON File Repository
//!
//! The whole store is one JSON document: an array of record objects.
//! Every `read` parses the file from scratch and every `save` rewrites it,
//! so edits made by another process between two operations are lost.
//!
//! A file that is not JSON at all reads as an empty store. A file that is
//! JSON but doesn't hold records of the expected shape is `Unreadable`,
//! which stops any mutation from overwriting it.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use stockroom_domain::model::record::Record;
use stockroom_domain::repository::record_repository::{RecordRepository, RepositoryError};

/// Record repository backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileRepository<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, err: impl core::fmt::Display) -> RepositoryError {
        let message = format!("{}: {}", self.path.display(), err);
        warn!(%message, "store file holds records of an unexpected shape");
        RepositoryError::Unreadable { message }
    }

    fn persistence_error(&self, err: impl core::fmt::Display) -> RepositoryError {
        RepositoryError::Persistence {
            message: format!("{}: {}", self.path.display(), err),
        }
    }
}

impl<R> RecordRepository<R> for JsonFileRepository<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    fn read(&self) -> Result<Vec<R>, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cannot read store file, treating as empty");
                return Ok(Vec::new());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "store file is not valid JSON, treating as empty");
                return Ok(Vec::new());
            }
        };

        let records = match document {
            Value::Null => Vec::new(),
            Value::Array(_) => serde_json::from_value::<Vec<R>>(document)
                .map_err(|e| self.unreadable(e))?,
            Value::Object(_) => {
                debug!(path = %self.path.display(), kind = R::KIND, "store holds a single object, reading it as one record");
                vec![serde_json::from_value::<R>(document).map_err(|e| self.unreadable(e))?]
            }
            other => {
                return Err(self.unreadable(format_args!(
                    "expected a list of {} records, found {}",
                    R::KIND,
                    json_kind(&other)
                )))
            }
        };

        debug!(path = %self.path.display(), count = records.len(), kind = R::KIND, "loaded store");
        Ok(records)
    }

    fn save(&mut self, records: &[R]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
            }
        }

        let payload = encode(records).map_err(|e| self.persistence_error(e))?;
        fs::write(&self.path, payload).map_err(|e| self.persistence_error(e))?;

        debug!(path = %self.path.display(), count = records.len(), kind = R::KIND, "saved store");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pretty-print with four-space indentation and a trailing newline
fn encode<R: Serialize>(records: &[R]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
