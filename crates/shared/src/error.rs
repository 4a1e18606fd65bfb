//! Error types for Stockroom

use std::path::PathBuf;

use stockroom_domain::RepositoryError;
use thiserror::Error;

/// Error thrown when a config file names no usable store path
#[derive(Debug, Error)]
#[error("Store path for '{store}' in {} is empty", config_path.display())]
pub struct EmptyStorePathError {
    pub store: &'static str,
    pub config_path: PathBuf,
}

/// General Stockroom error type
#[derive(Debug, Error)]
pub enum StockroomError {
    #[error(transparent)]
    EmptyStorePath(#[from] EmptyStorePathError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
