//! # Stockroom Shared
//!
//! Configuration and error types used by the CLI and its commands.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
