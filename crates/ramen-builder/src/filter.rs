//! Dietary filters
//!
//! Filters narrow which choices are presented. They never touch selections:
//! a picked choice that a filter hides stays picked and stays priced.

use ramen_catalog::{Choice, Tag};
use serde::{Deserialize, Serialize};

/// Active dietary toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryFilters {
    /// Keep only choices tagged `vegetarian`
    pub vegetarian_only: bool,
    /// Keep only choices tagged `glutenfree`
    pub gluten_free_only: bool,
}

impl DietaryFilters {
    /// No filtering
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// With vegetarian-only toggle
    #[inline]
    #[must_use]
    pub fn with_vegetarian_only(mut self, on: bool) -> Self {
        self.vegetarian_only = on;
        self
    }

    /// With gluten-free-only toggle
    #[inline]
    #[must_use]
    pub fn with_gluten_free_only(mut self, on: bool) -> Self {
        self.gluten_free_only = on;
        self
    }

    /// Check if any toggle is on
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.vegetarian_only || self.gluten_free_only
    }

    /// Tags a choice must carry explicitly
    ///
    /// `vegan` does not imply `vegetarian`; catalogs tag both.
    #[must_use]
    pub fn required_tags(&self) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(2);
        if self.vegetarian_only {
            tags.push(Tag::Vegetarian);
        }
        if self.gluten_free_only {
            tags.push(Tag::GlutenFree);
        }
        tags
    }

    /// Check if a choice passes every active toggle
    #[must_use]
    pub fn admits(&self, choice: &Choice) -> bool {
        self.required_tags().iter().all(|tag| choice.has_tag(tag))
    }
}

/// Choices of a category that pass `filters`, in catalog order
pub fn visible_choices<'a>(
    choices: &'a [Choice],
    filters: &DietaryFilters,
) -> impl Iterator<Item = &'a Choice> {
    let filters = *filters;
    choices.iter().filter(move |c| filters.admits(c))
}
