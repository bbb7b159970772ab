//! Completeness rules

use crate::selection::SelectionState;
use ramen_catalog::{Catalog, Category};

/// Whether a step may be left: optional, or something is selected
#[must_use]
pub fn step_satisfied(category: &Category, state: &SelectionState) -> bool {
    !category.is_required() || state.has_selection(&category.key)
}

/// Keys of required categories with nothing selected, in step order
#[must_use]
pub fn missing_required(catalog: &Catalog, state: &SelectionState) -> Vec<String> {
    catalog
        .steps()
        .filter(|c| !step_satisfied(c, state))
        .map(|c| c.key.clone())
        .collect()
}

/// Whether the selections make a complete bowl
#[must_use]
pub fn can_finalize(catalog: &Catalog, state: &SelectionState) -> bool {
    catalog.steps().all(|c| step_satisfied(c, state))
}
