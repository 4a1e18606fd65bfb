//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────
//! trait RecordRepository    │  JsonFileRepository
//!   fn load() / fn save()   │  InMemoryRepository
//!   fn append() ...         │
//! ```

pub mod record_repository;
