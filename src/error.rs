// ⚠️ Catalog errors
// Two kinds only: bad arguments (caught before any I/O) and persistence failures

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required argument was empty. Raised before touching the filesystem.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Reading, writing or (de)serializing the catalog file failed.
    #[error("Persistence error at {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistenceCause,
    },
}

/// The low-level failure behind a [`CatalogError::Persistence`].
#[derive(Error, Debug)]
pub enum PersistenceCause {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON failure: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CatalogError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: impl Into<PersistenceCause>) -> Self {
        CatalogError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CatalogError::InvalidArgument { .. })
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, CatalogError::Persistence { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
