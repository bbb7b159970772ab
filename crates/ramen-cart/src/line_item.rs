//! Finalized bowls
//!
//! A [`LineItem`] is detached from the builder that produced it: it owns its
//! name, its price frozen at finalization, and a denormalized copy of the
//! selections.

use ramen_builder::SelectionState;
use ramen_catalog::{keys, Money};
use serde::{Deserialize, Serialize};

/// Denormalized selections of a finalized bowl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetails {
    /// Noodle base
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Proteins in pick order
    pub protein: Vec<String>,
    /// Garden picks in pick order
    pub vegetables: Vec<String>,
    /// Sauce or broth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broth: Option<String>,
    /// Garnishes in pick order
    pub garnish: Vec<String>,
}

impl OrderDetails {
    /// Copy the five menu steps out of a selection snapshot
    #[must_use]
    pub fn from_selections(selections: &SelectionState) -> Self {
        let first =
            |key: &str| -> Option<String> { selections.names(key).next().map(str::to_string) };
        let all = |key: &str| -> Vec<String> { selections.names(key).map(str::to_string).collect() };

        Self {
            base: first(keys::NOODLE_BASE),
            protein: all(keys::PROTEIN),
            vegetables: all(keys::GARDEN_PICKS),
            broth: first(keys::SAUCE_BROTH),
            garnish: all(keys::GARNISH),
        }
    }
}

/// Rule for deriving a display name from selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePolicy {
    /// Longest derived name kept, in characters
    pub max_len: usize,
    /// Name used when the derived one is empty or too long
    pub fallback: String,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            max_len: 50,
            fallback: "Custom Ramen".to_string(),
        }
    }
}

impl NamePolicy {
    /// Base, proteins and broth joined by `" + "`
    #[must_use]
    pub fn derive_name(&self, details: &OrderDetails) -> String {
        let parts: Vec<&str> = details
            .base
            .iter()
            .chain(&details.protein)
            .chain(details.broth.iter())
            .map(String::as_str)
            .collect();
        let name = parts.join(" + ");

        if name.is_empty() || name.chars().count() > self.max_len {
            self.fallback.clone()
        } else {
            name
        }
    }
}

/// One priced bowl in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    price: Money,
    details: OrderDetails,
}

impl LineItem {
    /// Create line item
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money, details: OrderDetails) -> Self {
        Self {
            name: name.into(),
            price,
            details,
        }
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price frozen when the bowl was finalized
    #[inline]
    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Selections at finalization
    #[inline]
    #[must_use]
    pub fn details(&self) -> &OrderDetails {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(base: &str, protein: &[&str], broth: &str) -> OrderDetails {
        OrderDetails {
            base: Some(base.to_string()),
            protein: protein.iter().map(|p| (*p).to_string()).collect(),
            broth: Some(broth.to_string()),
            ..OrderDetails::default()
        }
    }

    #[test]
    fn name_joins_base_proteins_and_broth() {
        let policy = NamePolicy::default();
        let name = policy.derive_name(&details("Neo Udon", &["Tofu", "Egg"], "Miso"));
        assert_eq!(name, "Neo Udon + Tofu + Egg + Miso");
    }

    #[test]
    fn long_names_fall_back() {
        let policy = NamePolicy::default();
        let name = policy.derive_name(&details(
            "Forbidden Ramen",
            &["Chicken", "Tofu", "Shrimp", "Beef"],
            "Clear Dashi (GF)",
        ));
        assert_eq!(name, "Custom Ramen");
    }

    #[test]
    fn name_limit_counts_characters() {
        let policy = NamePolicy {
            max_len: 10,
            ..NamePolicy::default()
        };
        // 9 characters, 12 bytes
        assert_eq!(policy.derive_name(&details("Mí", &[], "Mísó")), "Mí + Mísó");
        assert_eq!(policy.derive_name(&details("Mí", &["Tófu"], "Mísó")), "Custom Ramen");
    }

    #[test]
    fn details_copy_the_menu_steps() {
        let selections = SelectionState::new()
            .with_single(keys::NOODLE_BASE, "Quantum Soba")
            .with_multi(keys::GARDEN_PICKS, ["Mushrooms", "Bean Sprouts"])
            .with_single(keys::SAUCE_BROTH, "Shoyu");
        let details = OrderDetails::from_selections(&selections);

        assert_eq!(details.base.as_deref(), Some("Quantum Soba"));
        assert!(details.protein.is_empty());
        assert_eq!(details.vegetables, vec!["Mushrooms", "Bean Sprouts"]);
        assert_eq!(details.broth.as_deref(), Some("Shoyu"));
    }

    #[test]
    fn wire_shape_matches_order_payload() {
        let item = LineItem::new(
            "Neo Udon + Miso",
            Money::from_cents(1599),
            details("Neo Udon", &[], "Miso"),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], 15.99);
        assert_eq!(json["details"]["base"], "Neo Udon");
        assert_eq!(json["details"]["protein"], serde_json::json!([]));
    }
}
