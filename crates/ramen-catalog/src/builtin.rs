//! Built-in storefront menu
//!
//! Substituted whenever a fetched catalog is unavailable or malformed, so the
//! configurator is never left without steps.

use crate::model::{keys, Catalog, Category, Choice, Tag};
use crate::money::Money;

fn item(name: &str, cents: i64, icon: &str, tags: &[Tag]) -> Choice {
    Choice::new(name, Money::from_cents(cents), icon).with_tags(tags.iter().cloned())
}

/// The static five-step ramen menu
#[must_use]
pub fn builtin_catalog() -> Catalog {
    use Tag::{Base, GlutenFree, Meat, Seafood, Vegan, Vegetarian};

    let noodles = Category::single(keys::NOODLE_BASE, "Choose Your Noodle Base")
        .with_choice(
            item("Forbidden Ramen", 0, "🥷🍜", &[Base, Vegetarian])
                .with_description("Signature spicy ramen with secret sauce."),
        )
        .with_choice(
            item("Neo Udon", 150, "🤖🍜", &[Base, Vegetarian])
                .with_description("Thick noodles, futuristic broth, plant protein.")
                .with_default(keys::GARDEN_PICKS, ["Bok Choy"]),
        )
        .with_choice(
            item("Quantum Soba", 175, "🌀🥢", &[Base, Vegetarian])
                .with_description("Buckwheat noodles, umami dashi, nano-greens.")
                .with_default(keys::GARDEN_PICKS, ["Mushrooms", "Bean Sprouts"]),
        )
        .with_choice(
            item("Rice Noodles (GF)", 150, "🌾🚫", &[Base, Vegetarian, GlutenFree])
                .with_description("Classic rice noodles, 100% gluten free."),
        );

    let protein = Category::multi(keys::PROTEIN, "Choose Your Protein")
        .with_choice(item("Chicken", 200, "🍗", &[Meat]))
        .with_choice(item("Tofu", 175, "🌱", &[Vegetarian, Vegan]))
        .with_choice(item("Shrimp", 250, "🦐", &[Seafood]))
        .with_choice(item("Beef", 300, "🥩", &[Meat]))
        .with_choice(item("Egg", 100, "🍳", &[Vegetarian]))
        .with_choice(
            item("Edamame (GF)", 100, "🌾🚫", &[Vegetarian, Vegan, GlutenFree])
                .with_description("Steamed edamame beans, gluten free."),
        );

    let garden = Category::multi(keys::GARDEN_PICKS, "Choose Your Garden Picks")
        .with_choice(item("Bok Choy", 75, "🥬", &[Vegetarian, Vegan]))
        .with_choice(item("Mushrooms", 100, "🍄", &[Vegetarian, Vegan]))
        .with_choice(item("Bean Sprouts", 50, "🌱", &[Vegetarian, Vegan]))
        .with_choice(item("Carrots", 50, "🥕", &[Vegetarian, Vegan]))
        .with_choice(item("Snow Peas", 75, "🌱", &[Vegetarian, Vegan]))
        .with_choice(
            item("Avocado (GF)", 125, "🥑", &[Vegetarian, Vegan, GlutenFree])
                .with_description("Fresh avocado, gluten free."),
        );

    let broth = Category::single(keys::SAUCE_BROTH, "Choose Your Sauce/Broth")
        .with_choice(item("Miso", 0, "🍲", &[Vegetarian]))
        .with_choice(item("Spicy Miso", 50, "🌶️", &[Vegetarian]))
        .with_choice(
            item("Clear Dashi (GF)", 50, "🌾🚫", &[GlutenFree])
                .with_description("Light, clear, gluten free dashi broth."),
        )
        .with_choice(item("Tonkotsu", 100, "🍲", &[Meat]))
        .with_choice(item("Shoyu", 0, "🍲", &[Vegetarian]))
        .with_choice(item("Curry", 100, "🍛", &[Vegetarian]));

    let garnish = Category::multi(keys::GARNISH, "Choose Your Garnish")
        .with_choice(item("Seaweed", 50, "🌿", &[Vegetarian, Vegan]))
        .with_choice(item("Green Onions", 50, "🧅", &[Vegetarian, Vegan]))
        .with_choice(item("Egg", 75, "🍳", &[Vegetarian]))
        .with_choice(item("Nori", 50, "🌿", &[Vegetarian, Vegan]))
        .with_choice(item("Sesame Seeds", 25, "🌱", &[Vegetarian, Vegan]));

    Catalog::new([noodles, protein, garden, broth, garnish])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.keys().collect::<Vec<_>>(),
            vec![
                keys::NOODLE_BASE,
                keys::PROTEIN,
                keys::GARDEN_PICKS,
                keys::SAUCE_BROTH,
                keys::GARNISH
            ]
        );
    }

    #[test]
    fn required_steps_are_base_and_broth() {
        let catalog = builtin_catalog();
        let required: Vec<&str> = catalog
            .steps()
            .filter(|c| c.is_required())
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(required, vec![keys::NOODLE_BASE, keys::SAUCE_BROTH]);
    }

    #[test]
    fn soba_cascades_two_vegetables() {
        let catalog = builtin_catalog();
        let soba = catalog.choice(keys::NOODLE_BASE, "Quantum Soba").unwrap();
        let defaults = soba.defaults.as_ref().unwrap();
        assert_eq!(defaults[keys::GARDEN_PICKS], vec!["Mushrooms", "Bean Sprouts"]);
    }
}
