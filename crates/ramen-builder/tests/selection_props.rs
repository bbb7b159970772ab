//! Property tests for selection semantics
//!
//! Toggle symmetry, single-select replacement and filter neutrality, run over
//! the built-in menu.

use proptest::prelude::*;
use ramen_builder::{apply_choice, DietaryFilters, RamenBuilder, SelectionState};
use ramen_catalog::{builtin_catalog, keys, Catalog};
use std::sync::Arc;

fn catalog() -> Catalog {
    builtin_catalog()
}

fn choice_names(catalog: &Catalog, key: &str) -> Vec<String> {
    catalog
        .get(key)
        .map(|c| c.choices.iter().map(|ch| ch.name.clone()).collect())
        .unwrap_or_default()
}

/// Any pick across the menu, as (category, choice)
fn any_pick() -> impl Strategy<Value = (String, String)> {
    let catalog = catalog();
    let picks: Vec<(String, String)> = catalog
        .steps()
        .flat_map(|c| {
            c.choices
                .iter()
                .map(move |ch| (c.key.clone(), ch.name.clone()))
        })
        .collect();
    proptest::sample::select(picks)
}

/// A multi-select pick
fn multi_pick() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        Just(keys::PROTEIN.to_string()),
        Just(keys::GARDEN_PICKS.to_string()),
        Just(keys::GARNISH.to_string()),
    ]
    .prop_flat_map(|key| {
        let names = choice_names(&catalog(), &key);
        (Just(key), proptest::sample::select(names))
    })
}

/// Arbitrary reachable state: a sequence of valid picks from empty
fn reachable_state() -> impl Strategy<Value = SelectionState> {
    proptest::collection::vec(any_pick(), 0..12).prop_map(|picks| {
        let catalog = catalog();
        picks.iter().fold(SelectionState::new(), |state, (key, name)| {
            apply_choice(&catalog, &state, key, name).unwrap()
        })
    })
}

proptest! {
    /// Toggling a multi-select choice twice restores the selections
    #[test]
    fn prop_double_toggle_restores_multi(
        state in reachable_state(),
        (key, name) in multi_pick(),
    ) {
        let catalog = catalog();
        let once = apply_choice(&catalog, &state, &key, &name).unwrap();
        let twice = apply_choice(&catalog, &once, &key, &name).unwrap();

        prop_assert_ne!(&once, &state);
        prop_assert_eq!(twice, state);
    }

    /// Single-select categories never hold more than one value
    #[test]
    fn prop_single_select_holds_one_value(
        state in reachable_state(),
        first in proptest::sample::select(choice_names(&catalog(), keys::SAUCE_BROTH)),
        second in proptest::sample::select(choice_names(&catalog(), keys::SAUCE_BROTH)),
    ) {
        let catalog = catalog();
        let state = apply_choice(&catalog, &state, keys::SAUCE_BROTH, &first).unwrap();
        let state = apply_choice(&catalog, &state, keys::SAUCE_BROTH, &second).unwrap();

        let names: Vec<&str> = state.names(keys::SAUCE_BROTH).collect();
        prop_assert_eq!(names, vec![second.as_str()]);
    }

    /// Changing filters never changes selections
    #[test]
    fn prop_filters_do_not_deselect(
        picks in proptest::collection::vec(any_pick(), 0..12),
        vegetarian in any::<bool>(),
        gluten_free in any::<bool>(),
    ) {
        let mut builder = RamenBuilder::new(Arc::new(catalog()));
        for (key, name) in &picks {
            builder.toggle_choice(key, name).unwrap();
        }
        let before = builder.snapshot();

        builder.set_filters(
            DietaryFilters::none()
                .with_vegetarian_only(vegetarian)
                .with_gluten_free_only(gluten_free),
        );

        prop_assert_eq!(builder.snapshot(), before);
    }
}
