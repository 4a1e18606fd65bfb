//! Record Repository - Abstract persistence for an ordered list of records
//!
//! An implementation only supplies `read` and `save` for the whole list.
//! Every other operation is a provided method that reads, changes one
//! thing and saves, so nothing is cached between calls.

use crate::model::record::{Measured, Record};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record failed validation and was not stored
    Validation { field: &'static str, reason: String },
    /// A positional operation was given an index past the end
    InvalidIndex { index: usize, len: usize },
    /// The stored document holds records this program cannot read back
    Unreadable { message: String },
    /// Failed to persist
    Persistence { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Validation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            RepositoryError::InvalidIndex { index, len } => {
                write!(f, "Invalid index {} (store holds {} records)", index, len)
            }
            RepositoryError::Unreadable { message } => {
                write!(f, "Stored records cannot be read, leaving them untouched: {}", message)
            }
            RepositoryError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Record Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// `read` reports an empty store for a missing or malformed document, and
/// `Unreadable` for well-formed JSON whose records don't fit `R`. Queries
/// go through `load`, which treats both as empty. Mutations go through
/// `read`, so they never save over records they failed to understand.
pub trait RecordRepository<R: Record> {
    /// Read the whole store
    fn read(&self) -> Result<Vec<R>, RepositoryError>;

    /// Read the whole store, treating anything unreadable as empty
    fn load(&self) -> Vec<R> {
        self.read().unwrap_or_default()
    }

    /// Replace the whole store
    fn save(&mut self, records: &[R]) -> Result<(), RepositoryError>;

    /// All records in store order
    fn list(&self) -> Vec<R> {
        self.load()
    }

    /// Number of stored records
    fn count(&self) -> usize {
        self.load().len()
    }

    /// Validate and append a record. Returns the new record count.
    fn append(&mut self, record: R) -> Result<usize, RepositoryError> {
        record.validate()?;

        let mut records = self.read()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len())
    }

    /// Remove every record whose key matches, ignoring case.
    /// Returns the removed records; the store is only rewritten if one matched.
    fn remove_by_key(&mut self, key: &str) -> Result<Vec<R>, RepositoryError> {
        let (removed, kept): (Vec<R>, Vec<R>) = self
            .read()?
            .into_iter()
            .partition(|record| record.matches_key(key));

        if !removed.is_empty() {
            self.save(&kept)?;
        }
        Ok(removed)
    }

    /// Remove the record at a zero-based position
    fn remove_at(&mut self, index: usize) -> Result<R, RepositoryError> {
        let mut records = self.read()?;
        if index >= records.len() {
            return Err(RepositoryError::InvalidIndex {
                index,
                len: records.len(),
            });
        }

        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    /// Apply `patch` to every record whose key matches.
    /// Returns how many records were updated.
    fn update_by_key(&mut self, key: &str, patch: &R::Patch) -> Result<usize, RepositoryError> {
        let mut records = self.read()?;
        let mut updated = 0;

        for record in records.iter_mut().filter(|record| record.matches_key(key)) {
            record.apply(patch);
            updated += 1;
        }

        if updated > 0 {
            self.save(&records)?;
        }
        Ok(updated)
    }

    /// All records whose key matches, ignoring case
    fn find_by_key(&self, key: &str) -> Vec<R> {
        self.load()
            .into_iter()
            .filter(|record| record.matches_key(key))
            .collect()
    }

    /// All records whose `field` is at most `limit`
    fn find_by_threshold(&self, field: <R as Measured>::Field, limit: u64) -> Vec<R>
    where
        R: Measured,
    {
        self.load()
            .into_iter()
            .filter(|record| record.measure(field) <= limit)
            .collect()
    }
}
