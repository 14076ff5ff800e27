//! Error types for blockframe-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from data-store operations.
///
/// Nothing in this layer retries or recovers; store failures surface to
/// the hosting framework's error handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure (bad statement, connection loss, etc.).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open the course database at the given path.
    #[error("failed to open course database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}
