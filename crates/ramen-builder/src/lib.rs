//! Ramen Builder
//!
//! The multi-step bowl configurator: which step the customer is on, what they
//! picked, and which choices the dietary filters let through.
//!
//! # Core Concepts
//!
//! - **Selection**: `Single(name)` or an ordered `Multi(set)` per category
//! - **apply_choice**: Pure reducer applying one pick plus its default cascade
//! - **DietaryFilters**: Presentation-only narrowing by explicit tags
//! - **RamenBuilder**: Step navigation and selection for one bowl
//!
//! # Example
//!
//! ```rust
//! use ramen_builder::{DietaryFilters, RamenBuilder};
//! use ramen_catalog::{builtin_catalog, keys};
//! use std::sync::Arc;
//!
//! let mut builder = RamenBuilder::new(Arc::new(builtin_catalog()));
//! builder.toggle_choice(keys::NOODLE_BASE, "Quantum Soba").unwrap();
//!
//! // Soba brings its garden defaults along
//! assert!(builder.is_selected(keys::GARDEN_PICKS, "Mushrooms"));
//!
//! builder.set_filters(DietaryFilters::none().with_vegetarian_only(true));
//! assert!(!builder.can_finalize());
//! ```

#![warn(unreachable_pub)]

pub mod builder;
pub mod error;
pub mod filter;
pub mod reducer;
pub mod rules;
pub mod selection;

// Re-exports
pub use builder::{ChoiceView, Progress, RamenBuilder};
pub use error::SelectionError;
pub use filter::{visible_choices, DietaryFilters};
pub use reducer::apply_choice;
pub use rules::{can_finalize, missing_required};
pub use selection::{Selection, SelectionState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building bowls
    pub use crate::{
        apply_choice, DietaryFilters, RamenBuilder, Selection, SelectionError, SelectionState,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
