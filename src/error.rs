//! Error types for the item store

use thiserror::Error;

/// Main error type for store and server operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database operation failed (connection or statement execution)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Form or path input could not be parsed into the expected number
    #[error("Invalid {field}: {value:?} is not a number")]
    ParseError {
        /// Name of the offending input (`price` or `id`)
        field: &'static str,
        /// The raw text that was submitted
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A blocking store task panicked or was cancelled
    #[error("Task error: {0}")]
    TaskError(String),
}

impl StoreError {
    /// True if the error was caused by caller input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::ParseError { .. })
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::DatabaseError(err.to_string())
    }
}

impl From<figment::Error> for StoreError {
    fn from(err: figment::Error) -> Self {
        StoreError::ConfigError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::TaskError(err.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
