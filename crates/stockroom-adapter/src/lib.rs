//! # Stockroom Adapter Layer
//!
//! Persistence implementations of the domain's `RecordRepository` port.
//!
//! ## Structure
//!
//! - `repository/json_file` - One JSON document on disk
//! - `repository/in_memory` - Lock-guarded vector for tests and wiring

pub mod repository;

pub use repository::in_memory::InMemoryRepository;
pub use repository::json_file::JsonFileRepository;
