//! Cart aggregate
//!
//! Ordered line items plus the order-level settings (delivery option, special
//! instructions). Totals are recomputed from the frozen line item prices; the
//! per-item breakdown is re-priced against whatever catalog is current.

use crate::error::CartError;
use crate::line_item::{LineItem, NamePolicy, OrderDetails};
use ramen_builder::{missing_required, SelectionState};
use ramen_catalog::{keys, Catalog, Money};
use ramen_pricing::{price_of, PricingEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery surcharge
pub const DEFAULT_DELIVERY_FEE: Money = Money::from_cents(399);

/// How the order leaves the kitchen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// Picked up at the counter
    #[default]
    Takeout,
    /// Delivered, with a surcharge
    Delivery,
}

impl DeliveryOption {
    /// Wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Takeout => "takeout",
            Self::Delivery => "delivery",
        }
    }
}

impl FromStr for DeliveryOption {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "takeout" => Ok(Self::Takeout),
            "delivery" => Ok(Self::Delivery),
            _ => Err(CartError::UnknownDeliveryOption(s.to_string())),
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prices and naming the cart applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPolicy {
    /// Prices new line items
    pub pricing: PricingEngine,
    /// Added to delivery orders
    pub delivery_fee: Money,
    /// Derives line item names
    pub naming: NamePolicy,
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self {
            pricing: PricingEngine::default(),
            delivery_fee: DEFAULT_DELIVERY_FEE,
            naming: NamePolicy::default(),
        }
    }
}

/// Order-level totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotal {
    /// Sum of line item prices
    pub subtotal: Money,
    /// Fee charged for the delivery option, zero for takeout
    pub delivery_fee: Money,
    /// Subtotal plus fee
    pub total: Money,
}

/// One display row of a line item breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    /// Ingredient name as stored on the line item
    pub label: String,
    /// Current catalog price, zero when unknown
    pub price: Money,
    /// False when the current catalog no longer carries the choice
    pub known: bool,
}

/// Finalized bowls awaiting checkout
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    delivery: DeliveryOption,
    special_instructions: String,
    policy: CartPolicy,
}

impl Cart {
    /// Create empty cart with default prices
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty cart with a policy
    #[must_use]
    pub fn with_policy(policy: CartPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Active policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &CartPolicy {
        &self.policy
    }

    /// Line items in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finalize selections into a new line item
    ///
    /// The item gets a derived name and the current price, both frozen.
    ///
    /// # Errors
    ///
    /// [`CartError::NotFinalizable`] if a required category is empty.
    pub fn add_line_item(
        &mut self,
        selections: &SelectionState,
        catalog: &Catalog,
    ) -> Result<&LineItem, CartError> {
        let missing = missing_required(catalog, selections);
        if !missing.is_empty() {
            tracing::warn!(missing = ?missing, "refusing incomplete bowl");
            return Err(CartError::NotFinalizable { missing });
        }

        let details = OrderDetails::from_selections(selections);
        let name = self.policy.naming.derive_name(&details);
        let price = self.policy.pricing.total(selections, catalog);

        tracing::info!(name = %name, price = %price, position = self.items.len(), "line item added");
        self.items.push(LineItem::new(name, price, details));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Append an existing line item
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the line item at `index`
    ///
    /// # Errors
    ///
    /// [`CartError::IndexOutOfRange`] for a stale index.
    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        tracing::info!(name = %item.name(), index, "line item removed");
        Ok(item)
    }

    /// Sum of frozen line item prices
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::price).sum()
    }

    /// Totals for a delivery option
    #[must_use]
    pub fn compute_order_total(&self, option: DeliveryOption) -> OrderTotal {
        let subtotal = self.subtotal();
        let delivery_fee = match option {
            DeliveryOption::Delivery => self.policy.delivery_fee,
            DeliveryOption::Takeout => Money::ZERO,
        };
        OrderTotal {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    /// Totals for the cart's own delivery option
    #[must_use]
    pub fn order_total(&self) -> OrderTotal {
        self.compute_order_total(self.delivery)
    }

    /// Per-ingredient rows of a line item, priced against `catalog`
    ///
    /// The base row carries the base price plus the noodle price. Names the
    /// catalog no longer carries keep their row at zero price.
    #[must_use]
    pub fn line_item_breakdown(&self, item: &LineItem, catalog: &Catalog) -> Vec<BreakdownRow> {
        let details = item.details();
        let row = |key: &str, name: &str| BreakdownRow {
            label: name.to_string(),
            price: price_of(catalog, key, name),
            known: catalog.choice(key, name).is_some(),
        };

        let mut rows = Vec::new();
        if let Some(base) = &details.base {
            let mut base_row = row(keys::NOODLE_BASE, base);
            base_row.price += self.policy.pricing.base_price();
            rows.push(base_row);
        }
        rows.extend(details.protein.iter().map(|n| row(keys::PROTEIN, n)));
        rows.extend(details.vegetables.iter().map(|n| row(keys::GARDEN_PICKS, n)));
        rows.extend(details.broth.iter().map(|n| row(keys::SAUCE_BROTH, n)));
        rows.extend(details.garnish.iter().map(|n| row(keys::GARNISH, n)));
        rows
    }

    /// Selected delivery option
    #[inline]
    #[must_use]
    pub fn delivery(&self) -> DeliveryOption {
        self.delivery
    }

    /// Choose the delivery option
    pub fn set_delivery(&mut self, option: DeliveryOption) {
        self.delivery = option;
    }

    /// Free-text note for the kitchen
    #[inline]
    #[must_use]
    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }

    /// Replace the note for the kitchen
    pub fn set_special_instructions(&mut self, text: impl Into<String>) {
        self.special_instructions = text.into();
    }

    /// Whether checkout would be offered
    #[inline]
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        !self.items.is_empty()
    }

    /// Drop every line item and the note; the delivery option is kept
    pub fn clear(&mut self) {
        self.items.clear();
        self.special_instructions.clear();
    }
}
