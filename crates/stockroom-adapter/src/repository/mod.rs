//! Persistence Adapters - Repository implementations
//!
//! These implement the repository trait from stockroom-domain.

pub mod in_memory;
pub mod json_file;
