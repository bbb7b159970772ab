//! Ramen Pricing
//!
//! Folds a selection snapshot into a bowl price: the base price once, plus the
//! catalog price of every selected name. Pure and total; stale names count as
//! zero.
//!
//! # Example
//!
//! ```rust
//! use ramen_builder::SelectionState;
//! use ramen_catalog::{builtin_catalog, Money};
//! use ramen_pricing::PricingEngine;
//!
//! let catalog = builtin_catalog();
//! let bowl = SelectionState::new()
//!     .with_single("noodleBase", "Forbidden Ramen")
//!     .with_multi("protein", ["Tofu"]);
//!
//! assert_eq!(PricingEngine::default().total(&bowl, &catalog), Money::from_cents(425));
//! ```

#![warn(unreachable_pub)]

pub mod engine;

// Re-exports
pub use engine::{compute_total, price_of, PricingEngine, DEFAULT_BASE_PRICE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
