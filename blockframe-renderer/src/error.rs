//! Error types for blockframe-renderer.

use std::path::PathBuf;

use thiserror::Error;

use blockframe_core::StoreError;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Data-store failure while building a payload model.
    #[error("data store error: {0}")]
    Store(#[from] StoreError),

    /// Filesystem error while loading user template overrides.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output stream rejected a rendered page.
    #[error("failed to write rendered page: {0}")]
    Output(#[source] std::io::Error),
}
