//! # Stockroom Domain Layer
//!
//! Records and the operations that keep them, independent of where they
//! are stored.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Product, Task, Record & Measured traits      ││
//! │  │  repository/ - RecordRepository port + CRUD operations      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adapters only have to know how to load and save a whole list of
//! records. Append, remove, update and the lookups are written once here
//! and behave the same for a JSON file and for an in-memory vector.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    product::{Product, ProductField, ProductPatch},
    record::{keys_match, Measured, Record},
    task::{Task, TaskPatch},
};

pub use repository::record_repository::{RecordRepository, RepositoryError};
