//! Error types for the menu catalog
//!
//! Covers the catalog boundary:
//! - Retrieval failures (unreachable store, unreadable file)
//! - Payloads that do not have the catalog shape
//! - Catalogs that parse but break model invariants

use crate::validation::ValidationReport;
use std::path::PathBuf;

/// Catalog retrieval and access errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Backing store could not produce a catalog
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// IO error while reading a catalog file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Payload is not shaped like a catalog
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// Payload parsed but violates catalog invariants
    #[error("invalid catalog: {0}")]
    Invalid(#[from] ValidationReport),

    /// Lookup of a category key that the catalog does not define
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    /// Menu store item id that does not exist
    #[error("unknown menu item id: {0}")]
    UnknownItem(u32),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an ordinary retrieval failure
    ///
    /// The loader falls back on every error, but only logs these as warnings;
    /// anything else is a fault in the source and is logged as an error.
    #[inline]
    #[must_use]
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            Self::Unavailable(_) | Self::Io { .. } | Self::Malformed(_) | Self::Invalid(_)
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}
