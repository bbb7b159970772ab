//! Selection reducer
//!
//! [`apply_choice`] is the only place selections change in response to a
//! pick. It works from the old state plus the new choice and returns the next
//! state, so cascades never depend on update ordering.

use crate::error::SelectionError;
use crate::selection::SelectionState;
use ramen_catalog::{Catalog, Category, Choice};

/// Apply one pick to `state`
///
/// Single-select categories take the new value; picking the current value
/// again leaves the selections unchanged. Multi-select categories toggle
/// membership. When a single-select value changes, the new choice's default
/// cascade is merged into its target categories:
///
/// - multi-select targets receive the union of current and default names
/// - single-select targets take the first default name, unless the customer
///   already picked that category explicitly
///
/// Cascades do not chain: a value set by a cascade never triggers its own.
///
/// # Errors
///
/// [`SelectionError`] if `key` or `name` is not in the catalog.
pub fn apply_choice(
    catalog: &Catalog,
    state: &SelectionState,
    key: &str,
    name: &str,
) -> Result<SelectionState, SelectionError> {
    let category = catalog
        .get(key)
        .ok_or_else(|| SelectionError::UnknownCategory(key.to_string()))?;
    let choice = category
        .choice(name)
        .ok_or_else(|| SelectionError::unknown_choice(key, name))?;

    let mut next = state.clone();

    if category.multi {
        // removing the last name also drops the explicit mark
        if !next.remove(key, name) {
            next.insert_multi(key, name);
            next.mark_explicit(key);
        }
        tracing::debug!(category = key, choice = name, "multi-select toggled");
        return Ok(next);
    }

    next.mark_explicit(key);
    if state.is_selected(key, name) {
        return Ok(next);
    }

    next.set_single(key, name);
    tracing::debug!(category = key, choice = name, "single-select changed");
    cascade(catalog, &mut next, choice);
    Ok(next)
}

fn cascade(catalog: &Catalog, state: &mut SelectionState, choice: &Choice) {
    let Some(defaults) = &choice.defaults else {
        return;
    };

    for (target_key, names) in defaults {
        let Some(target) = catalog.get(target_key) else {
            tracing::debug!(target = %target_key, "cascade target not in catalog, skipped");
            continue;
        };

        let mut known = names.iter().filter(|n| known_choice(target, n));

        if target.multi {
            for default in known {
                state.insert_multi(target_key.as_str(), default.as_str());
            }
        } else if state.is_explicit(target_key) {
            tracing::debug!(target = %target_key, "explicit pick kept over cascade");
        } else if let Some(default) = known.next() {
            state.set_single(target_key.as_str(), default.as_str());
        }
    }

    tracing::debug!(source = %choice.name, "default cascade applied");
}

fn known_choice(target: &Category, name: &str) -> bool {
    let known = target.contains(name);
    if !known {
        tracing::debug!(target = %target.key, choice = name, "cascade names a missing choice, skipped");
    }
    known
}
