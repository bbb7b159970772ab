//! Catalog sources
//!
//! A [`CatalogSource`] is anything that can produce a catalog on demand: the
//! built-in menu, a JSON file, a payload already fetched over the network, or
//! the menu store.

use crate::builtin::builtin_catalog;
use crate::error::CatalogError;
use crate::model::Catalog;
use async_trait::async_trait;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Producer of catalogs
#[async_trait]
pub trait CatalogSource: Send + Sync + Debug {
    /// Stable name, used as the cache key and in logs
    fn name(&self) -> &str;

    /// Produce a catalog
    async fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// The built-in menu
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CatalogSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Ok(builtin_catalog())
    }
}

/// Catalog stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Create source for path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    /// Path read by this source
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let payload = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io_error(&self.path, e))?;
        Catalog::from_json(&payload)
    }
}

/// Response body of a catalog endpoint
///
/// Transport is the caller's concern; a failed request is represented by
/// [`JsonPayloadSource::failed`] so the loader can fall back uniformly.
#[derive(Debug, Clone)]
pub struct JsonPayloadSource {
    name: String,
    body: Result<String, String>,
}

impl JsonPayloadSource {
    /// Successful response body
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Ok(body.into()),
        }
    }

    /// Request that failed before a body was received
    #[must_use]
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Err(reason.into()),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonPayloadSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        match &self.body {
            Ok(body) => Catalog::from_json(body),
            Err(reason) => Err(CatalogError::Unavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn builtin_source_always_succeeds() {
        let catalog = BuiltinSource.fetch().await.unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn file_source_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sauceBroth": {{ "label": "Broth", "key": "sauceBroth", "multi": false,
                 "choices": [{{ "name": "Miso", "price": 0, "icon": "🍲", "tags": ["vegetarian"] }}] }} }}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let catalog = source.fetch().await.unwrap();
        assert!(catalog.choice("sauceBroth", "Miso").is_some());
        assert!(source.name().starts_with("file:"));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = JsonFileSource::new("/definitely/not/here/menu.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.is_retrieval_failure());
    }

    #[tokio::test]
    async fn payload_sources_report_shape_and_transport_errors() {
        let malformed = JsonPayloadSource::new("api", r#"{ "error": "db down" }"#);
        assert!(matches!(malformed.fetch().await, Err(CatalogError::Malformed(_))));

        let failed = JsonPayloadSource::failed("api", "HTTP 503");
        assert!(matches!(failed.fetch().await, Err(CatalogError::Unavailable(_))));
    }
}
