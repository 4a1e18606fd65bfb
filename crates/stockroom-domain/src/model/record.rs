//! Record - The capability contract every stored type implements
//!
//! A record is identified by its key (a name or a title), compared without
//! regard to case. There is no generated id, so two records may share a key.

use crate::repository::record_repository::RepositoryError;

/// Something a [`RecordRepository`](crate::RecordRepository) can store.
pub trait Record: Clone {
    /// Optional replacement values used by `update_by_key`
    type Patch;

    /// Singular noun used in messages ("product", "task")
    const KIND: &'static str;

    /// The lookup value (name or title)
    fn key(&self) -> &str;

    /// Check the required text field before the record is appended
    fn validate(&self) -> Result<(), RepositoryError>;

    /// Overwrite the fields the patch supplies, keep the rest
    fn apply(&mut self, patch: &Self::Patch);

    /// Case-insensitive key comparison
    fn matches_key(&self, key: &str) -> bool {
        keys_match(self.key(), key)
    }
}

/// A record with numeric fields that can be filtered by an upper bound.
pub trait Measured: Record {
    /// Which numeric field to read
    type Field: Copy + core::fmt::Display;

    fn measure(&self, field: Self::Field) -> u64;
}

/// Compare two keys the way lookups do: exact, ignoring case.
pub fn keys_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Reject text that is empty once surrounding whitespace is removed.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
