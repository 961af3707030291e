//! Store Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the spending store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the database file
    #[error("Failed to open database at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Username already registered
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Underlying SQLite error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error (e.g. creating the data directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
