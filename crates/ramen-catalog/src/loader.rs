//! Fallback-aware catalog loading
//!
//! The loader fetches once per source, validates, and caches the result.
//! Any retrieval failure is absorbed here: the built-in catalog is
//! substituted and the reason is kept on the [`LoadedCatalog`] for logging.

use crate::builtin::builtin_catalog;
use crate::error::CatalogError;
use crate::model::Catalog;
use crate::source::CatalogSource;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Where a loaded catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Produced by the named source
    Source(String),
    /// Built-in catalog substituted after a failure
    Fallback {
        /// Source that failed
        source: String,
        /// Error that caused the fallback
        reason: String,
    },
}

impl CatalogOrigin {
    /// Whether the built-in catalog was substituted
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A catalog together with its origin
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Validated catalog, shared between sessions
    pub catalog: Arc<Catalog>,
    /// Where it came from
    pub origin: CatalogOrigin,
}

/// Fetch from `source` and validate, substituting the built-in catalog on failure
pub async fn fetch_or_fallback(source: &dyn CatalogSource) -> LoadedCatalog {
    let name = source.name().to_string();
    match fetch_validated(source).await {
        Ok(catalog) => {
            tracing::info!(source = %name, steps = catalog.len(), "catalog loaded");
            LoadedCatalog {
                catalog: Arc::new(catalog),
                origin: CatalogOrigin::Source(name),
            }
        }
        Err(e) => {
            if e.is_retrieval_failure() {
                tracing::warn!(source = %name, error = %e, "catalog unavailable, using built-in menu");
            } else {
                tracing::error!(source = %name, error = %e, "catalog source failed, using built-in menu");
            }
            LoadedCatalog {
                catalog: Arc::new(builtin_catalog()),
                origin: CatalogOrigin::Fallback {
                    source: name,
                    reason: e.to_string(),
                },
            }
        }
    }
}

async fn fetch_validated(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let catalog = source.fetch().await?;
    catalog.validate()?;
    Ok(catalog)
}

/// One-shot catalog loader with a cache in front of the source
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    cache: Cache<String, LoadedCatalog>,
}

impl CatalogLoader {
    /// Create loader that caches until refreshed
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: Cache::new(16),
        }
    }

    /// Create loader whose cached catalog expires after `ttl`
    #[must_use]
    pub fn with_ttl(source: Arc<dyn CatalogSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: Cache::builder().max_capacity(16).time_to_live(ttl).build(),
        }
    }

    /// Name of the underlying source
    #[inline]
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Cached catalog, fetching on first use
    pub async fn load(&self) -> LoadedCatalog {
        let source = Arc::clone(&self.source);
        self.cache
            .get_with(self.source.name().to_string(), async move {
                fetch_or_fallback(source.as_ref()).await
            })
            .await
    }

    /// Drop the cached catalog and fetch again
    pub async fn refresh(&self) -> LoadedCatalog {
        self.cache.invalidate(self.source.name()).await;
        self.load().await
    }

    /// Check if a catalog is cached
    #[inline]
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.contains_key(self.source.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MenuStore;
    use crate::source::{BuiltinSource, JsonPayloadSource};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        async fn fetch(&self) -> Result<Catalog, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(builtin_catalog())
        }
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_builtin() {
        let source = JsonPayloadSource::failed("api", "connection refused");
        let loaded = fetch_or_fallback(&source).await;

        assert!(loaded.origin.is_fallback());
        assert_eq!(*loaded.catalog, builtin_catalog());
    }

    #[tokio::test]
    async fn invalid_catalog_falls_back_to_builtin() {
        let store = MenuStore::new(Vec::new(), Vec::new());
        let loaded = fetch_or_fallback(&store).await;

        match loaded.origin {
            CatalogOrigin::Fallback { source, reason } => {
                assert_eq!(source, "menu-store");
                assert!(reason.contains("no categories"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[derive(Debug)]
    struct BrokenStoreSource;

    #[async_trait]
    impl CatalogSource for BrokenStoreSource {
        fn name(&self) -> &str {
            "broken-store"
        }

        async fn fetch(&self) -> Result<Catalog, CatalogError> {
            Err(CatalogError::UnknownItem(42))
        }
    }

    #[tokio::test]
    async fn source_faults_also_fall_back() {
        let err = CatalogError::UnknownItem(42);
        assert!(!err.is_retrieval_failure());

        let loaded = fetch_or_fallback(&BrokenStoreSource).await;
        assert!(loaded.origin.is_fallback());
        assert_eq!(*loaded.catalog, builtin_catalog());
    }

    #[tokio::test]
    async fn out_of_range_prices_fall_back() {
        let source = JsonPayloadSource::new(
            "api",
            r#"{ "noodleBase": { "label": "Noodles", "key": "noodleBase", "multi": false,
                 "choices": [{ "name": "Gold", "price": 1e17 }] } }"#,
        );
        let loaded = fetch_or_fallback(&source).await;

        match loaded.origin {
            CatalogOrigin::Fallback { reason, .. } => assert!(reason.contains("Gold")),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn loader_fetches_once_until_refresh() {
        let source = Arc::new(CountingSource::default());
        let loader = CatalogLoader::new(source.clone());

        let first = loader.load().await;
        let second = loader.load().await;
        assert!(Arc::ptr_eq(&first.catalog, &second.catalog));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(loader.is_cached());

        loader.refresh().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn successful_source_is_reported() {
        let loader = CatalogLoader::new(Arc::new(BuiltinSource));
        let loaded = loader.load().await;
        assert_eq!(loaded.origin, CatalogOrigin::Source("builtin".to_string()));
        assert_eq!(loader.source_name(), "builtin");
    }
}
