//! Catalog assembly from relational menu rows
//!
//! The menu is persisted as two tables, categories and items. Items carry a
//! sort order and an `is_active` soft-delete flag. Assembly orders both by sort
//! order and drops inactive items, producing the catalog shape the configurator
//! consumes.

use crate::error::CatalogError;
use crate::model::{Catalog, Category, Choice, Defaults, Tag};
use crate::money::Money;
use crate::source::CatalogSource;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Row of the categories table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Primary key
    pub id: u32,
    /// Category key used in selections
    pub key: String,
    /// Step heading
    pub label: String,
    /// Multi-select step
    pub multi: bool,
    /// Step position, ascending
    pub sort_order: i32,
}

/// Row of the items table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Primary key
    pub id: u32,
    /// Owning [`CategoryRecord::id`]
    pub category_id: u32,
    /// Choice name
    pub name: String,
    /// Choice price
    pub price: Money,
    /// Display emoji
    pub icon: String,
    /// Display-only blurb
    #[serde(default)]
    pub description: Option<String>,
    /// Dietary labels
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Cascade rules
    #[serde(default)]
    pub defaults: Defaults,
    /// False once soft-deleted
    pub is_active: bool,
    /// Position within the category, ascending
    pub sort_order: i32,
}

impl ItemRecord {
    fn to_choice(&self) -> Choice {
        Choice {
            name: self.name.clone(),
            price: self.price,
            icon: self.icon.clone(),
            tags: self.tags.iter().cloned().collect(),
            description: self.description.clone(),
            defaults: (!self.defaults.is_empty()).then(|| self.defaults.clone()),
        }
    }
}

/// Build a catalog from table rows
///
/// Categories with no active items are kept; validation reports them.
#[must_use]
pub fn assemble(categories: &[CategoryRecord], items: &[ItemRecord]) -> Catalog {
    let mut ordered: Vec<&CategoryRecord> = categories.iter().collect();
    ordered.sort_by_key(|c| c.sort_order);

    Catalog::new(ordered.into_iter().map(|record| {
        let mut rows: Vec<&ItemRecord> = items
            .iter()
            .filter(|i| i.category_id == record.id && i.is_active)
            .collect();
        rows.sort_by_key(|i| i.sort_order);

        Category {
            label: record.label.clone(),
            key: record.key.clone(),
            multi: record.multi,
            required: None,
            choices: rows.into_iter().map(ItemRecord::to_choice).collect(),
        }
    }))
}

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<CategoryRecord>,
    items: Vec<ItemRecord>,
}

/// In-memory menu tables acting as a catalog source
#[derive(Debug, Default)]
pub struct MenuStore {
    tables: RwLock<Tables>,
}

impl MenuStore {
    /// Create store over existing rows
    #[must_use]
    pub fn new(categories: Vec<CategoryRecord>, items: Vec<ItemRecord>) -> Self {
        Self {
            tables: RwLock::new(Tables { categories, items }),
        }
    }

    /// Seed rows from a catalog, numbering ids and sort orders in step order
    #[must_use]
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut categories = Vec::with_capacity(catalog.len());
        let mut items = Vec::new();
        let mut next_item_id = 1;

        for (category_id, category) in (1..).zip(catalog.steps()) {
            categories.push(CategoryRecord {
                id: category_id,
                key: category.key.clone(),
                label: category.label.clone(),
                multi: category.multi,
                sort_order: i32::try_from(category_id).unwrap_or(i32::MAX),
            });

            for (sort_order, choice) in (0..).zip(&category.choices) {
                items.push(ItemRecord {
                    id: next_item_id,
                    category_id,
                    name: choice.name.clone(),
                    price: choice.price,
                    icon: choice.icon.clone(),
                    description: choice.description.clone(),
                    tags: choice.tags.iter().cloned().collect(),
                    defaults: choice.defaults.clone().unwrap_or_default(),
                    is_active: true,
                    sort_order,
                });
                next_item_id += 1;
            }
        }

        Self::new(categories, items)
    }

    /// Id of the item named `name` in category `key`
    #[must_use]
    pub fn item_id(&self, key: &str, name: &str) -> Option<u32> {
        let tables = self.tables.read();
        let category = tables.categories.iter().find(|c| c.key == key)?;
        tables
            .items
            .iter()
            .find(|i| i.category_id == category.id && i.name == name)
            .map(|i| i.id)
    }

    /// Soft-delete an item; it disappears from subsequently assembled catalogs
    pub fn deactivate_item(&self, id: u32) -> Result<(), CatalogError> {
        let mut tables = self.tables.write();
        let item = tables
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CatalogError::UnknownItem(id))?;
        item.is_active = false;
        tracing::info!(item = id, name = %item.name, "menu item deactivated");
        Ok(())
    }

    /// Change an item's price
    pub fn reprice_item(&self, id: u32, price: Money) -> Result<(), CatalogError> {
        let mut tables = self.tables.write();
        let item = tables
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CatalogError::UnknownItem(id))?;
        item.price = price;
        Ok(())
    }

    /// Assemble the current catalog
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        let tables = self.tables.read();
        assemble(&tables.categories, &tables.items)
    }
}

#[async_trait]
impl CatalogSource for MenuStore {
    fn name(&self) -> &str {
        "menu-store"
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Ok(self.snapshot())
    }
}
