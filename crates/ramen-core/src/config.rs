//! Storefront configuration
//!
//! Loaded from TOML; every field has a default, so an empty file is valid.
//!
//! ```toml
//! [pricing]
//! base_price = 2.50
//! delivery_fee = 3.99
//!
//! [naming]
//! max_name_len = 50
//! fallback_name = "Custom Ramen"
//!
//! [catalog]
//! path = "menu.json"
//! cache_ttl_secs = 300
//! ```

use crate::error::ConfigError;
use ramen_cart::{CartPolicy, NamePolicy, DEFAULT_DELIVERY_FEE};
use ramen_catalog::{BuiltinSource, CatalogLoader, CatalogSource, JsonFileSource, Money};
use ramen_pricing::{PricingEngine, DEFAULT_BASE_PRICE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Top-level storefront configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// `[pricing]` table
    pub pricing: PricingConfig,
    /// `[naming]` table
    pub naming: NamingConfig,
    /// `[catalog]` table
    pub catalog: CatalogConfig,
}

/// Price constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Applied once per bowl
    pub base_price: Money,
    /// Added to delivery orders
    pub delivery_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            delivery_fee: DEFAULT_DELIVERY_FEE,
        }
    }
}

/// Line item naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Longest derived name kept, in characters
    pub max_name_len: usize,
    /// Name used for empty or over-long derived names
    pub fallback_name: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        let policy = NamePolicy::default();
        Self {
            max_name_len: policy.max_len,
            fallback_name: policy.fallback,
        }
    }
}

/// Where the menu comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in menu when absent
    pub path: Option<PathBuf>,
    /// Seconds a loaded catalog is reused; 0 keeps it until refreshed
    pub cache_ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            cache_ttl_secs: 300,
        }
    }
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.path = Some(path.into());
        self
    }

    /// With delivery fee
    #[inline]
    #[must_use]
    pub fn with_delivery_fee(mut self, fee: Money) -> Self {
        self.pricing.delivery_fee = fee;
        self
    }

    /// Parse and validate TOML
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "storefront config loaded");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.base_price.is_negative() {
            return Err(ConfigError::Invalid("pricing.base_price must not be negative".into()));
        }
        if self.pricing.delivery_fee.is_negative() {
            return Err(ConfigError::Invalid("pricing.delivery_fee must not be negative".into()));
        }
        if self.naming.max_name_len == 0 {
            return Err(ConfigError::Invalid("naming.max_name_len must be at least 1".into()));
        }
        if self.naming.fallback_name.trim().is_empty() {
            return Err(ConfigError::Invalid("naming.fallback_name must not be blank".into()));
        }
        Ok(())
    }

    /// Pricing engine for the configured base price
    #[must_use]
    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(self.pricing.base_price)
    }

    /// Cart policy for the configured prices and naming
    #[must_use]
    pub fn cart_policy(&self) -> CartPolicy {
        CartPolicy {
            pricing: self.pricing_engine(),
            delivery_fee: self.pricing.delivery_fee,
            naming: NamePolicy {
                max_len: self.naming.max_name_len,
                fallback: self.naming.fallback_name.clone(),
            },
        }
    }

    /// Catalog source named by the configuration
    #[must_use]
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        match &self.catalog.path {
            Some(path) => Arc::new(JsonFileSource::new(path)),
            None => Arc::new(BuiltinSource),
        }
    }

    /// Loader over `source` honouring the cache TTL
    #[must_use]
    pub fn catalog_loader(&self, source: Arc<dyn CatalogSource>) -> CatalogLoader {
        match self.catalog.cache_ttl_secs {
            0 => CatalogLoader::new(source),
            secs => CatalogLoader::with_ttl(source, Duration::from_secs(secs)),
        }
    }
}
