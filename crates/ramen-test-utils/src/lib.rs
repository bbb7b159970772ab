//! Testing utilities for the Forbidden Ramen workspace
//!
//! Shared menus, cart items and catalog sources.

#![allow(missing_docs)]

use async_trait::async_trait;
use ramen_cart::{LineItem, OrderDetails};
use ramen_catalog::{keys, Catalog, CatalogError, CatalogSource, Category, Choice, Money, Tag};

fn choice(name: &str, cents: i64, icon: &str, tags: &[&str]) -> Choice {
    Choice::new(name, Money::from_cents(cents), icon).with_tags(tags.iter().map(|t| Tag::from(*t)))
}

/// Four-category menu: Ramen, Chicken and Tofu (multi), Miso
pub fn minimal_catalog() -> Catalog {
    Catalog::new([
        Category::single(keys::NOODLE_BASE, "Choose Your Noodle Base")
            .with_choice(choice("Ramen", 0, "🍜", &["vegetarian"])),
        Category::multi(keys::PROTEIN, "Choose Your Protein")
            .with_choice(choice("Chicken", 200, "🍗", &["meat"]))
            .with_choice(choice("Tofu", 175, "🌱", &["vegetarian", "vegan"])),
        Category::single(keys::SAUCE_BROTH, "Choose Your Sauce/Broth")
            .with_choice(choice("Miso", 0, "🍲", &["vegetarian"])),
    ])
}

/// Five-step test menu; Neo Udon cascades a broth and a vegetable
pub fn fixture_catalog() -> Catalog {
    Catalog::new([
        Category::single(keys::NOODLE_BASE, "Choose Your Noodle Base")
            .with_choice(choice("Forbidden Ramen", 0, "🥷🍜", &["vegetarian"]))
            .with_choice(
                choice("Neo Udon", 150, "🤖🍜", &["vegetarian"])
                    .with_default(keys::SAUCE_BROTH, ["Spicy Miso"])
                    .with_default(keys::GARDEN_PICKS, ["Bok Choy"]),
            )
            .with_choice(
                choice("Quantum Soba", 175, "🌀🥢", &["vegetarian"])
                    .with_default(keys::GARDEN_PICKS, ["Mushrooms", "Bean Sprouts"]),
            )
            .with_choice(choice("Rice Noodles", 150, "🌾🚫", &["vegetarian", "glutenfree"])),
        Category::multi(keys::PROTEIN, "Choose Your Protein")
            .with_choice(choice("Chicken", 200, "🍗", &["meat"]))
            .with_choice(choice("Tofu", 175, "🌱", &["vegetarian", "vegan"]))
            .with_choice(choice("Edamame", 100, "🌾🚫", &["vegetarian", "vegan", "glutenfree"])),
        Category::multi(keys::GARDEN_PICKS, "Choose Your Garden Picks")
            .with_choice(choice("Bok Choy", 75, "🥬", &["vegetarian", "vegan"]))
            .with_choice(choice("Mushrooms", 100, "🍄", &["vegetarian", "vegan"]))
            .with_choice(choice("Bean Sprouts", 50, "🌱", &["vegetarian", "vegan"])),
        Category::single(keys::SAUCE_BROTH, "Choose Your Sauce/Broth")
            .with_choice(choice("Miso", 0, "🍲", &["vegetarian"]))
            .with_choice(choice("Spicy Miso", 50, "🌶️", &["vegetarian"]))
            .with_choice(choice("Clear Dashi", 50, "🌾🚫", &["vegetarian", "glutenfree"])),
        Category::multi(keys::GARNISH, "Choose Your Garnish")
            .with_choice(choice("Seaweed", 50, "🌿", &["vegetarian", "vegan"]))
            .with_choice(choice("Green Onions", 50, "🧅", &["vegetarian", "vegan"]))
            .with_choice(choice("Sesame Seeds", 25, "🌱", &["vegetarian", "vegan"])),
    ])
}

/// [`fixture_catalog`] in its JSON wire shape
pub fn fixture_catalog_json() -> String {
    fixture_catalog()
        .to_json()
        .unwrap_or_else(|e| panic!("fixture catalog serializes: {e}"))
}

/// Two saved cart items priced 15.99 and 12.75
///
/// Their details use slug names that no catalog carries.
pub fn mock_cart_items() -> Vec<LineItem> {
    let slugs = |names: &[&str]| names.iter().map(|n| (*n).to_string()).collect::<Vec<_>>();
    vec![
        LineItem::new(
            "Ramen + Chicken + Miso",
            Money::from_cents(1599),
            OrderDetails {
                base: Some("ramen".into()),
                protein: slugs(&["chicken"]),
                vegetables: slugs(&["bok-choy", "mushrooms"]),
                broth: Some("miso".into()),
                garnish: slugs(&["green-onions"]),
            },
        ),
        LineItem::new(
            "Udon + Tofu + Spicy Miso",
            Money::from_cents(1275),
            OrderDetails {
                base: Some("udon".into()),
                protein: slugs(&["tofu"]),
                vegetables: slugs(&["bean-sprouts"]),
                broth: Some("spicy-miso".into()),
                garnish: slugs(&["seaweed"]),
            },
        ),
    ]
}

/// Source whose fetch always fails
#[derive(Debug, Clone)]
pub struct FailingSource {
    /// Reported as [`CatalogError::Unavailable`]
    pub reason: String,
}

impl FailingSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Err(CatalogError::Unavailable(self.reason.clone()))
    }
}
