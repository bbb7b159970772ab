//! Ramen Catalog
//!
//! Menu data for the bowl configurator: the ordered steps, their choices,
//! prices and cascade rules, plus the machinery to obtain a catalog that is
//! always usable.
//!
//! # Core Concepts
//!
//! - **Catalog**: Ordered categories keyed by category key
//! - **Money**: Prices held as whole cents
//! - **CatalogSource**: Anything that can produce a catalog (built-in, file, payload, menu store)
//! - **CatalogLoader**: Cached loading that falls back to the built-in menu on any failure
//!
//! # Example
//!
//! ```rust
//! use ramen_catalog::{builtin_catalog, keys, Money};
//!
//! let catalog = builtin_catalog();
//! assert_eq!(catalog.len(), 5);
//! assert_eq!(
//!     catalog.price_of(keys::PROTEIN, "Chicken"),
//!     Some(Money::from_cents(200))
//! );
//! ```

#![warn(unreachable_pub)]

pub mod builtin;
pub mod error;
pub mod loader;
pub mod model;
pub mod money;
pub mod records;
pub mod source;
pub mod validation;

// Re-exports
pub use builtin::builtin_catalog;
pub use error::CatalogError;
pub use loader::{fetch_or_fallback, CatalogLoader, CatalogOrigin, LoadedCatalog};
pub use model::{keys, Catalog, Category, Choice, Defaults, Tag};
pub use money::Money;
pub use records::{assemble, CategoryRecord, ItemRecord, MenuStore};
pub use source::{BuiltinSource, CatalogSource, JsonFileSource, JsonPayloadSource};
pub use validation::{ValidationIssue, ValidationReport};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog access
    pub use crate::{
        builtin_catalog, keys, Catalog, CatalogError, CatalogLoader, CatalogSource, Category,
        Choice, Money, Tag,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
