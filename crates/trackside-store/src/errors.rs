//! Store error types.

use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// Storage failures are propagated to callers unchanged — the store performs
/// no retry and no local recovery. A `get` miss is `Ok(None)`, never an
/// error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or query execution failure from `SQLite`.
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Store result alias.
pub type Result<T> = std::result::Result<T, StoreError>;
