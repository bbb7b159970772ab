//! Selection pricing
//!
//! `total = base price + every selected name's catalog price`, summed in whole
//! cents. Names the catalog no longer carries are priced at zero, so historic
//! selections stay priceable after menu edits.

use ramen_builder::SelectionState;
use ramen_catalog::{Catalog, Money};
use serde::{Deserialize, Serialize};

/// Base price applied once per bowl
pub const DEFAULT_BASE_PRICE: Money = Money::from_cents(250);

/// Catalog price of one selected name; zero when stale
#[must_use]
pub fn price_of(catalog: &Catalog, key: &str, name: &str) -> Money {
    catalog.price_of(key, name).unwrap_or_else(|| {
        tracing::debug!(category = key, choice = name, "stale choice priced at zero");
        Money::ZERO
    })
}

/// Price a selection snapshot
#[must_use]
pub fn compute_total(selections: &SelectionState, catalog: &Catalog, base_price: Money) -> Money {
    let ingredients: Money = selections
        .iter()
        .flat_map(|(key, selection)| selection.names().map(move |name| (key, name)))
        .map(|(key, name)| price_of(catalog, key, name))
        .sum();
    base_price + ingredients
}

/// Pricing with a configured base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEngine {
    base_price: Money,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE)
    }
}

impl PricingEngine {
    /// Create engine with a base price
    #[inline]
    #[must_use]
    pub const fn new(base_price: Money) -> Self {
        Self { base_price }
    }

    /// Base price applied once per bowl
    #[inline]
    #[must_use]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    /// Price a selection snapshot
    #[must_use]
    pub fn total(&self, selections: &SelectionState, catalog: &Catalog) -> Money {
        compute_total(selections, catalog, self.base_price)
    }
}
