//! Step-by-step bowl configurator
//!
//! [`RamenBuilder`] owns the current step index, the selections and the
//! dietary filters for one bowl in progress. Navigation never touches
//! selections; every pick goes through [`apply_choice`].

use crate::error::SelectionError;
use crate::filter::{visible_choices, DietaryFilters};
use crate::reducer::apply_choice;
use crate::rules;
use crate::selection::{Selection, SelectionState};
use ramen_catalog::{Catalog, Category, Choice};
use serde::Serialize;
use std::sync::Arc;

/// One row of the current step as presented to the customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView<'a> {
    /// The catalog choice
    pub choice: &'a Choice,
    /// Whether it is in the current selections
    pub selected: bool,
    /// Selected but hidden by the active filters
    pub filtered_out: bool,
}

/// Position in the step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based current step
    pub current: usize,
    /// Number of steps
    pub total: usize,
    /// Share of steps reached, 0 to 100
    pub percent: u8,
}

/// Configurator session for one bowl
#[derive(Debug, Clone)]
pub struct RamenBuilder {
    catalog: Arc<Catalog>,
    current_step: usize,
    selections: SelectionState,
    filters: DietaryFilters,
}

impl RamenBuilder {
    /// Start at the first step with nothing selected
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current_step: 0,
            selections: SelectionState::new(),
            filters: DietaryFilters::default(),
        }
    }

    /// With dietary filters
    #[inline]
    #[must_use]
    pub fn with_filters(mut self, filters: DietaryFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Catalog the builder works against
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Active dietary filters
    #[inline]
    #[must_use]
    pub fn filters(&self) -> DietaryFilters {
        self.filters
    }

    /// Replace the dietary filters; selections are kept
    pub fn set_filters(&mut self, filters: DietaryFilters) {
        self.filters = filters;
    }

    /// Current selections
    #[inline]
    #[must_use]
    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    /// Selection of one category
    #[must_use]
    pub fn selection(&self, key: &str) -> Option<&Selection> {
        self.selections.get(key)
    }

    /// Copy of the selections, detached from the builder
    #[must_use]
    pub fn snapshot(&self) -> SelectionState {
        self.selections.clone()
    }

    // ---- navigation ----

    /// Zero-based index of the current step
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Category of the current step
    #[must_use]
    pub fn current_category(&self) -> Option<&Category> {
        self.catalog.step_at(self.current_step)
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    /// Check if on the last step
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.step_count()
    }

    /// Move to the next step, stopping at the last
    pub fn advance(&mut self) -> usize {
        let last = self.step_count().saturating_sub(1);
        self.current_step = (self.current_step + 1).min(last);
        self.current_step
    }

    /// Move to the previous step, stopping at the first
    pub fn retreat(&mut self) -> usize {
        self.current_step = self.current_step.saturating_sub(1);
        self.current_step
    }

    /// Move directly to step `index`
    ///
    /// # Errors
    ///
    /// [`SelectionError::StepOutOfRange`] past the last step.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SelectionError> {
        let steps = self.step_count();
        if index >= steps {
            return Err(SelectionError::StepOutOfRange { index, steps });
        }
        self.current_step = index;
        Ok(())
    }

    // ---- selection ----

    /// Pick or toggle a choice in any category
    ///
    /// # Errors
    ///
    /// [`SelectionError`] for a category or choice the catalog does not carry.
    pub fn toggle_choice(&mut self, key: &str, name: &str) -> Result<(), SelectionError> {
        match apply_choice(&self.catalog, &self.selections, key, name) {
            Ok(next) => {
                self.selections = next;
                Ok(())
            }
            Err(e) => {
                tracing::error!(category = key, choice = name, error = %e, "invalid selection");
                Err(e)
            }
        }
    }

    /// Pick or toggle a choice of the current step
    ///
    /// # Errors
    ///
    /// [`SelectionError`] if the choice is not part of the current step.
    pub fn toggle_current(&mut self, name: &str) -> Result<(), SelectionError> {
        let key = self
            .current_category()
            .map(|c| c.key.clone())
            .ok_or(SelectionError::StepOutOfRange {
                index: self.current_step,
                steps: self.step_count(),
            })?;
        self.toggle_choice(&key, name)
    }

    /// Deselect one name; false if it was not selected
    pub fn remove_choice(&mut self, key: &str, name: &str) -> bool {
        let removed = self.selections.remove(key, name);
        if removed {
            tracing::debug!(category = key, choice = name, "choice removed");
        }
        removed
    }

    /// Deselect everything in one category
    pub fn clear_category(&mut self, key: &str) -> Option<Selection> {
        self.selections.clear_category(key)
    }

    /// Clear all selections and return to the first step; filters are kept
    pub fn restart(&mut self) {
        self.selections.clear();
        self.current_step = 0;
    }

    // ---- queries ----

    /// Check if `name` is selected in `key`
    #[must_use]
    pub fn is_selected(&self, key: &str, name: &str) -> bool {
        self.selections.is_selected(key, name)
    }

    /// Selected names across all categories
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.selections.total_items()
    }

    /// Check if anything is selected
    #[must_use]
    pub fn has_selections(&self) -> bool {
        !self.selections.is_empty()
    }

    /// Whether the current step may be left forward
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_category()
            .is_some_and(|c| rules::step_satisfied(c, &self.selections))
    }

    /// Whether every required category has a selection
    #[must_use]
    pub fn can_finalize(&self) -> bool {
        rules::can_finalize(&self.catalog, &self.selections)
    }

    /// Required categories still missing a selection
    #[must_use]
    pub fn missing_required(&self) -> Vec<String> {
        rules::missing_required(&self.catalog, &self.selections)
    }

    /// Choices of the current step passing the filters
    pub fn visible_choices(&self) -> impl Iterator<Item = &Choice> {
        let choices = self
            .current_category()
            .map_or(&[][..], |c| c.choices.as_slice());
        visible_choices(choices, &self.filters)
    }

    /// Rows to present for the current step
    ///
    /// Visible choices in catalog order, followed by selected choices the
    /// filters hide, flagged `filtered_out`.
    #[must_use]
    pub fn step_view(&self) -> Vec<ChoiceView<'_>> {
        let Some(category) = self.current_category() else {
            return Vec::new();
        };

        let (mut visible, hidden): (Vec<_>, Vec<_>) = category
            .choices
            .iter()
            .map(|choice| {
                let selected = self.selections.is_selected(&category.key, &choice.name);
                ChoiceView {
                    choice,
                    selected,
                    filtered_out: !self.filters.admits(choice),
                }
            })
            .partition(|row| !row.filtered_out);

        visible.extend(hidden.into_iter().filter(|row| row.selected));
        visible
    }

    /// Step position for progress display
    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.step_count();
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((self.current_step + 1) * 100 / total).unwrap_or(100)
        };
        Progress {
            current: self.current_step,
            total,
            percent,
        }
    }
}
