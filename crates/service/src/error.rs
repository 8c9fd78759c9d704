//! Typed error enum for the service layer.

use std::path::PathBuf;

use recipebox_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, input and file failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, not found, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank title, wrong JSON shape).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The recipe table is empty, so there is nothing to pick from.
    #[error("no recipes available")]
    NoRecipes,

    /// Reading an import file failed.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Import file is not valid JSON.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
