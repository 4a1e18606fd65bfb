//! In-Memory Repository Implementation
//!
//! Keeps the record list in a shared vector instead of a file.
//! Useful for testing and development.

use std::sync::{Arc, RwLock};

use stockroom_domain::model::record::Record;
use stockroom_domain::repository::record_repository::{RecordRepository, RepositoryError};

/// In-memory Record Repository
///
/// Clones share the same records, so a test can keep a handle and inspect
/// what the code under test wrote.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from an existing list
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordRepository<R> for InMemoryRepository<R> {
    fn read(&self) -> Result<Vec<R>, RepositoryError> {
        let records = self.records.read().map_err(|_| {
            RepositoryError::Unreadable {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(records.clone())
    }

    fn save(&mut self, records: &[R]) -> Result<(), RepositoryError> {
        let mut stored = self.records.write().map_err(|_| {
            RepositoryError::Persistence {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        *stored = records.to_vec();
        Ok(())
    }
}
