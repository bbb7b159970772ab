//! Error types for the storefront core
//!
//! [`RamenError`] gathers the per-crate errors so session callers handle one
//! type:
//! - Selection wiring faults from the builder
//! - Cart index and completeness errors
//! - Catalog access errors
//! - Configuration errors

use ramen_builder::SelectionError;
use ramen_cart::CartError;
use ramen_catalog::CatalogError;
use std::path::PathBuf;

/// Main storefront error type
#[derive(Debug, thiserror::Error)]
pub enum RamenError {
    /// Unknown category or choice
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Cart operation failed
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Catalog access failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RamenError {
    /// Check if the caller can recover by re-reading state and retrying
    ///
    /// Selection errors point at catalog or caller drift and are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Cart(e) => e.is_recoverable(),
            Self::Catalog(_) => true,
            Self::Selection(_) | Self::Config(_) => false,
        }
    }
}

/// Storefront configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config values out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}
