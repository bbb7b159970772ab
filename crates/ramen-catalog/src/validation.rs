//! Catalog invariant checks
//!
//! Two layers:
//! - [`check_shape`] runs on a raw fetched payload, before typed decoding
//! - [`validate`] runs on a decoded [`Catalog`] and collects every issue

use crate::error::CatalogError;
use crate::model::Catalog;
use crate::money::Money;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// A single broken invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// Catalog has no categories at all
    #[error("catalog has no categories")]
    EmptyCatalog,

    /// Map key differs from the category's own key
    #[error("category stored under '{map_key}' declares key '{key}'")]
    KeyMismatch {
        /// Key the category is stored under
        map_key: String,
        /// Key the category declares
        key: String,
    },

    /// Category without choices
    #[error("category '{0}' has no choices")]
    EmptyCategory(String),

    /// Two choices share a name within one category
    #[error("category '{category}' lists '{choice}' more than once")]
    DuplicateChoice {
        /// Category key
        category: String,
        /// Repeated choice name
        choice: String,
    },

    /// Price below zero
    #[error("choice '{choice}' in '{category}' has a negative price")]
    NegativePrice {
        /// Category key
        category: String,
        /// Choice name
        choice: String,
    },

    /// Price above [`Money::MAX_PRICE`]
    #[error("choice '{choice}' in '{category}' has a price above {max}")]
    PriceOutOfRange {
        /// Category key
        category: String,
        /// Choice name
        choice: String,
        /// Largest accepted price
        max: Money,
    },

    /// Cascade rule pointing at a category the catalog does not define
    #[error("choice '{choice}' in '{category}' cascades into unknown category '{target}'")]
    UnknownCascadeTarget {
        /// Category holding the choice
        category: String,
        /// Choice carrying the rule
        choice: String,
        /// Missing target key
        target: String,
    },
}

/// Every issue found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Issues in discovery order
    #[inline]
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Check if no issue was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Check model invariants on a decoded catalog
///
/// Cascade rules may name choices that no longer exist (soft-deleted items);
/// those are skipped when the cascade runs, so only unknown target categories
/// are reported.
pub fn validate(catalog: &Catalog) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if catalog.is_empty() {
        report.push(ValidationIssue::EmptyCatalog);
    }

    for (map_key, category) in catalog.entries() {
        if *map_key != category.key {
            report.push(ValidationIssue::KeyMismatch {
                map_key: map_key.clone(),
                key: category.key.clone(),
            });
        }

        if category.choices.is_empty() {
            report.push(ValidationIssue::EmptyCategory(category.key.clone()));
        }

        let mut seen = HashSet::new();
        for choice in &category.choices {
            if !seen.insert(choice.name.as_str()) {
                report.push(ValidationIssue::DuplicateChoice {
                    category: category.key.clone(),
                    choice: choice.name.clone(),
                });
            }

            if choice.price.is_negative() {
                report.push(ValidationIssue::NegativePrice {
                    category: category.key.clone(),
                    choice: choice.name.clone(),
                });
            } else if choice.price > Money::MAX_PRICE {
                report.push(ValidationIssue::PriceOutOfRange {
                    category: category.key.clone(),
                    choice: choice.name.clone(),
                    max: Money::MAX_PRICE,
                });
            }

            for target in choice.defaults.iter().flat_map(|d| d.keys()) {
                if catalog.get(target).is_none() {
                    report.push(ValidationIssue::UnknownCascadeTarget {
                        category: category.key.clone(),
                        choice: choice.name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

/// Structural check on a raw payload: an object holding at least one
/// category with a non-empty `choices` array
pub fn check_shape(payload: &Value) -> Result<(), CatalogError> {
    let Value::Object(categories) = payload else {
        return Err(CatalogError::Malformed(
            "expected an object keyed by category".to_string(),
        ));
    };

    let usable = categories.values().any(|category| {
        category
            .get("choices")
            .and_then(Value::as_array)
            .is_some_and(|choices| !choices.is_empty())
    });

    if usable {
        Ok(())
    } else {
        Err(CatalogError::Malformed(
            "no category with choices".to_string(),
        ))
    }
}
