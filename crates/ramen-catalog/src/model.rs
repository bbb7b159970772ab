//! Catalog model
//!
//! A [`Catalog`] is an ordered set of [`Category`] steps, each holding the
//! [`Choice`]s a customer can pick. Serialized shape:
//!
//! ```text
//! { "<categoryKey>": { "label", "key", "multi", "choices": [{ "name", "price", "icon", "tags", "defaults"? }] } }
//! ```

use crate::error::CatalogError;
use crate::money::Money;
use crate::validation::{self, ValidationReport};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Category keys used by the storefront menu
pub mod keys {
    /// Noodle base step (single-select)
    pub const NOODLE_BASE: &str = "noodleBase";
    /// Protein step (multi-select)
    pub const PROTEIN: &str = "protein";
    /// Vegetable step (multi-select)
    pub const GARDEN_PICKS: &str = "gardenPicks";
    /// Sauce/broth step (single-select)
    pub const SAUCE_BROTH: &str = "sauceBroth";
    /// Garnish step (multi-select)
    pub const GARNISH: &str = "garnish";
}

/// Dietary or classification label on a choice
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// `vegetarian`
    Vegetarian,
    /// `vegan`; does not imply vegetarian for filtering
    Vegan,
    /// `meat`
    Meat,
    /// `seafood`
    Seafood,
    /// `glutenfree` (also accepted as `gluten-free`)
    GlutenFree,
    /// `base`, marks noodle bases
    Base,
    /// Any other label, kept verbatim
    Other(String),
}

impl Tag {
    /// Wire name of the tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Vegetarian => "vegetarian",
            Tag::Vegan => "vegan",
            Tag::Meat => "meat",
            Tag::Seafood => "seafood",
            Tag::GlutenFree => "glutenfree",
            Tag::Base => "base",
            Tag::Other(other) => other,
        }
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "vegetarian" => Tag::Vegetarian,
            "vegan" => Tag::Vegan,
            "meat" => Tag::Meat,
            "seafood" => Tag::Seafood,
            "glutenfree" | "gluten-free" => Tag::GlutenFree,
            "base" => Tag::Base,
            _ => Tag::Other(value),
        }
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::from(value.to_string())
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        match value {
            Tag::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cascade rules: target category key to the choice names it receives
pub type Defaults = IndexMap<String, Vec<String>>;

/// One selectable item within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChoice")]
pub struct Choice {
    /// Display name, unique within its category
    pub name: String,
    /// Price added when selected
    pub price: Money,
    /// Emoji shown next to the name
    pub icon: String,
    /// Dietary labels
    pub tags: BTreeSet<Tag>,
    /// Display-only blurb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cascade rules applied when this choice is picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Defaults>,
}

impl Choice {
    /// Create a choice without tags or cascade rules
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            icon: icon.into(),
            tags: BTreeSet::new(),
            description: None,
            defaults: None,
        }
    }

    /// With tags
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// With description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With a cascade rule for `target`
    #[must_use]
    pub fn with_default<I, S>(mut self, target: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.defaults
            .get_or_insert_with(Defaults::new)
            .insert(target.into(), names);
        self
    }

    /// Check for a tag
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

/// Accepts both `tags: [..]` and the legacy single `tag` field, and either a
/// string or a list for each cascade target.
#[derive(Deserialize)]
struct RawChoice {
    name: String,
    #[serde(default)]
    price: Money,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    tag: Option<Tag>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    defaults: Option<IndexMap<String, OneOrMany>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        let mut tags: BTreeSet<Tag> = raw.tags.into_iter().collect();
        tags.extend(raw.tag);

        let defaults = raw
            .defaults
            .map(|rules| {
                rules
                    .into_iter()
                    .map(|(target, names)| match names {
                        OneOrMany::One(name) => (target, vec![name]),
                        OneOrMany::Many(names) => (target, names),
                    })
                    .collect::<Defaults>()
            })
            .filter(|rules| !rules.is_empty());

        Self {
            name: raw.name,
            price: raw.price,
            icon: raw.icon,
            tags,
            description: raw.description,
            defaults,
        }
    }
}

/// One configurator step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Heading shown for the step
    pub label: String,
    /// Unique key, also the catalog map key
    pub key: String,
    /// Whether several choices may be selected
    pub multi: bool,
    /// Explicit requiredness; single-select steps are required when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Choices in display order
    pub choices: Vec<Choice>,
}

impl Category {
    /// Create a single-select category
    #[must_use]
    pub fn single(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            multi: false,
            required: None,
            choices: Vec::new(),
        }
    }

    /// Create a multi-select category
    #[must_use]
    pub fn multi(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            multi: true,
            ..Self::single(key, label)
        }
    }

    /// Override requiredness
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Append a choice
    #[must_use]
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Whether an order must pick something in this step
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(!self.multi)
    }

    /// Find a choice by name
    #[must_use]
    pub fn choice(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name == name)
    }

    /// Whether a choice with this name exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.choice(name).is_some()
    }
}

/// Ordered collection of categories, keyed by category key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Category>,
}

impl Catalog {
    /// Build from categories in step order; a repeated key replaces the earlier entry
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|c| (c.key.clone(), c))
                .collect(),
        }
    }

    /// Parse a fetched payload, checking its shape and invariants
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        validation::check_shape(&value)?;
        let catalog: Catalog = serde_json::from_value(value)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize to the wire shape
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check model invariants
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validation::validate(self)
    }

    /// Category by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Category by key, failing for unknown keys
    pub fn step(&self, key: &str) -> Result<&Category, CatalogError> {
        self.get(key)
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))
    }

    /// Category at a step index
    #[inline]
    #[must_use]
    pub fn step_at(&self, index: usize) -> Option<&Category> {
        self.categories.get_index(index).map(|(_, c)| c)
    }

    /// Step index of a category key
    #[inline]
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.categories.get_index_of(key)
    }

    /// Categories in step order
    pub fn steps(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Category keys in step order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Choice lookup by category key and name
    #[must_use]
    pub fn choice(&self, key: &str, name: &str) -> Option<&Choice> {
        self.get(key).and_then(|c| c.choice(name))
    }

    /// Price of a choice, if the catalog still carries it
    #[must_use]
    pub fn price_of(&self, key: &str, name: &str) -> Option<Money> {
        self.choice(key, name).map(|c| c.price)
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }
}
