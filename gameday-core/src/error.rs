//! Error types for the gameday ecosystem.

use thiserror::Error;

/// Errors that can occur in gameday storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored appointment data is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gameday storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
