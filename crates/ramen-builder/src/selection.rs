//! Selection representation
//!
//! One tagged value per category: a single name, or an insertion-ordered set
//! of names. Empty sets are never stored; clearing the last name of a
//! multi-select category removes the key.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Active choice(s) of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    /// Single-select value
    Single(String),
    /// Multi-select names in the order they were picked
    Multi(IndexSet<String>),
}

impl Selection {
    /// Selected names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let (single, multi) = match self {
            Self::Single(name) => (Some(name.as_str()), None),
            Self::Multi(names) => (None, Some(names)),
        };
        single
            .into_iter()
            .chain(multi.into_iter().flatten().map(String::as_str))
    }

    /// Check if a name is selected
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Single(current) => current == name,
            Self::Multi(names) => names.contains(name),
        }
    }

    /// Number of selected names
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(names) => names.len(),
        }
    }

    /// Check if nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selections of one bowl in progress, keyed by category
///
/// Also remembers which categories the customer picked explicitly, so default
/// cascades never overwrite them. That bookkeeping is not part of equality or
/// serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    selections: BTreeMap<String, Selection>,
    #[serde(skip)]
    explicit: BTreeSet<String>,
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        self.selections == other.selections
    }
}

impl Eq for SelectionState {}

impl SelectionState {
    /// Create empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a single-select value
    #[must_use]
    pub fn with_single(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.set_single(key, name);
        self
    }

    /// With multi-select names, appended in order
    #[must_use]
    pub fn with_multi<I, S>(mut self, key: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        for name in names {
            self.insert_multi(key.clone(), name);
        }
        self
    }

    /// Selection of a category
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Selection> {
        self.selections.get(key)
    }

    /// Selected names of a category; empty when nothing is selected
    pub fn names(&self, key: &str) -> impl Iterator<Item = &str> {
        self.selections.get(key).into_iter().flat_map(Selection::names)
    }

    /// Check if `name` is selected in category `key`
    #[must_use]
    pub fn is_selected(&self, key: &str, name: &str) -> bool {
        self.selections.get(key).is_some_and(|s| s.contains(name))
    }

    /// Check if category `key` has at least one selected name
    #[must_use]
    pub fn has_selection(&self, key: &str) -> bool {
        self.selections.get(key).is_some_and(|s| !s.is_empty())
    }

    /// Selected names across all categories
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.selections.values().map(Selection::len).sum()
    }

    /// Check if nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Categories and their selections
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.selections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Set the single-select value of a category
    pub fn set_single(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.selections.insert(key.into(), Selection::Single(name.into()));
    }

    /// Add a name to a multi-select category; false if already present
    pub fn insert_multi(&mut self, key: impl Into<String>, name: impl Into<String>) -> bool {
        let entry = self
            .selections
            .entry(key.into())
            .or_insert_with(|| Selection::Multi(IndexSet::new()));

        match entry {
            Selection::Multi(names) => names.insert(name.into()),
            Selection::Single(_) => {
                *entry = Selection::Multi(IndexSet::from([name.into()]));
                true
            }
        }
    }

    /// Remove one name from a category; false if it was not selected
    pub fn remove(&mut self, key: &str, name: &str) -> bool {
        let Some(selection) = self.selections.get_mut(key) else {
            return false;
        };

        let removed = match selection {
            Selection::Single(current) => current == name,
            Selection::Multi(names) => names.shift_remove(name),
        };

        if removed && (matches!(selection, Selection::Single(_)) || selection.is_empty()) {
            self.selections.remove(key);
            self.explicit.remove(key);
        }
        removed
    }

    /// Drop every selection of a category
    pub fn clear_category(&mut self, key: &str) -> Option<Selection> {
        self.explicit.remove(key);
        self.selections.remove(key)
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.selections.clear();
        self.explicit.clear();
    }

    /// Record that the customer picked category `key` themselves
    pub fn mark_explicit(&mut self, key: impl Into<String>) {
        self.explicit.insert(key.into());
    }

    /// Check if category `key` was picked explicitly
    #[must_use]
    pub fn is_explicit(&self, key: &str) -> bool {
        self.explicit.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_sets_keep_pick_order_and_drop_when_empty() {
        let mut state = SelectionState::new().with_multi("protein", ["Tofu", "Chicken"]);
        assert_eq!(state.names("protein").collect::<Vec<_>>(), vec!["Tofu", "Chicken"]);
        assert!(!state.insert_multi("protein", "Tofu"));

        assert!(state.remove("protein", "Tofu"));
        assert!(state.remove("protein", "Chicken"));
        assert!(state.get("protein").is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn totals_count_every_name() {
        let state = SelectionState::new()
            .with_single("noodleBase", "Ramen")
            .with_multi("protein", ["Tofu", "Chicken"]);
        assert_eq!(state.total_items(), 3);
        assert!(state.is_selected("noodleBase", "Ramen"));
        assert!(!state.is_selected("noodleBase", "Udon"));
        assert!(state.has_selection("protein"));
        assert!(!state.has_selection("garnish"));
    }

    #[test]
    fn explicit_marks_are_not_part_of_equality() {
        let mut marked = SelectionState::new().with_single("sauceBroth", "Miso");
        marked.mark_explicit("sauceBroth");
        let plain = SelectionState::new().with_single("sauceBroth", "Miso");

        assert_eq!(marked, plain);
        assert!(marked.is_explicit("sauceBroth"));

        marked.clear_category("sauceBroth");
        assert!(!marked.is_explicit("sauceBroth"));
    }

    #[test]
    fn serializes_as_tagged_shapes() {
        let state = SelectionState::new()
            .with_single("noodleBase", "Ramen")
            .with_multi("protein", ["Tofu"]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"noodleBase":"Ramen","protein":["Tofu"]}"#);

        let parsed: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
