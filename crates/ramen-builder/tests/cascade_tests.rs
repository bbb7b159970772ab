//! Default cascade precedence
//!
//! Both orderings: an explicit pick made before the cascade survives it, and a
//! target nobody picked is filled by it.

use ramen_builder::RamenBuilder;
use ramen_catalog::{keys, Catalog, Category, Choice, Money};
use std::sync::Arc;

fn menu() -> Arc<Catalog> {
    Arc::new(Catalog::new([
        Category::single(keys::NOODLE_BASE, "Noodles")
            .with_choice(Choice::new("Forbidden Ramen", Money::ZERO, "🍜"))
            .with_choice(
                Choice::new("Neo Udon", Money::from_cents(150), "🤖")
                    .with_default(keys::SAUCE_BROTH, ["Spicy Miso"])
                    .with_default(keys::GARDEN_PICKS, ["Bok Choy"]),
            ),
        Category::multi(keys::GARDEN_PICKS, "Garden")
            .with_choice(Choice::new("Bok Choy", Money::from_cents(75), "🥬"))
            .with_choice(Choice::new("Carrots", Money::from_cents(50), "🥕")),
        Category::single(keys::SAUCE_BROTH, "Broth")
            .with_choice(Choice::new("Miso", Money::ZERO, "🍲"))
            .with_choice(Choice::new("Spicy Miso", Money::from_cents(50), "🌶️")),
    ]))
}

/// Explicit broth first, then a base whose cascade names another broth
#[test]
fn test_explicit_target_survives_cascade() {
    let mut b = RamenBuilder::new(menu());
    b.toggle_choice(keys::SAUCE_BROTH, "Miso").unwrap();
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();

    assert!(b.is_selected(keys::SAUCE_BROTH, "Miso"));
    assert!(!b.is_selected(keys::SAUCE_BROTH, "Spicy Miso"));
}

/// Base first: the unset broth is populated
#[test]
fn test_unset_target_is_populated() {
    let mut b = RamenBuilder::new(menu());
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();

    assert!(b.is_selected(keys::SAUCE_BROTH, "Spicy Miso"));
    assert!(b.is_selected(keys::GARDEN_PICKS, "Bok Choy"));
}

/// A later explicit pick overrides the cascaded value, and switching base
/// back and forth does not undo it
#[test]
fn test_explicit_pick_after_cascade_is_kept() {
    let mut b = RamenBuilder::new(menu());
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();
    b.toggle_choice(keys::SAUCE_BROTH, "Miso").unwrap();
    b.toggle_choice(keys::NOODLE_BASE, "Forbidden Ramen").unwrap();
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();

    assert!(b.is_selected(keys::SAUCE_BROTH, "Miso"));
}

/// User vegetables are kept alongside cascaded ones
#[test]
fn test_multi_target_union_keeps_user_picks() {
    let mut b = RamenBuilder::new(menu());
    b.toggle_choice(keys::GARDEN_PICKS, "Carrots").unwrap();
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();

    let names: Vec<&str> = b.selections().names(keys::GARDEN_PICKS).collect();
    assert_eq!(names, vec!["Carrots", "Bok Choy"]);
}

/// Restart forgets explicit picks, so the cascade applies again
#[test]
fn test_restart_resets_explicit_tracking() {
    let mut b = RamenBuilder::new(menu());
    b.toggle_choice(keys::SAUCE_BROTH, "Miso").unwrap();
    b.restart();
    b.toggle_choice(keys::NOODLE_BASE, "Neo Udon").unwrap();

    assert!(b.is_selected(keys::SAUCE_BROTH, "Spicy Miso"));
}
