//! Error types for tour-progress.

use thiserror::Error;

/// Errors that can occur while persisting tour progress.
///
/// Note what is *not* here: corrupt stored data.  That degrades to the empty
/// record inside `load` per the durability contract.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, ProgressError>`.
pub type ProgressResult<T> = Result<T, ProgressError>;
