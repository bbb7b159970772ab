//! Ramen Cart
//!
//! Holds finalized bowls. Each [`LineItem`] freezes its name, price and
//! selections when added, so later edits to the builder or the menu never
//! change what was ordered; only the display breakdown is re-priced.
//!
//! # Core Concepts
//!
//! - **LineItem**: Derived name, frozen price, denormalized [`OrderDetails`]
//! - **Cart**: Ordered line items with removal by index
//! - **OrderTotal**: Subtotal plus the delivery fee when delivering
//! - **BreakdownRow**: Per-ingredient display rows against the current menu
//!
//! # Example
//!
//! ```rust
//! use ramen_builder::SelectionState;
//! use ramen_cart::{Cart, DeliveryOption};
//! use ramen_catalog::{builtin_catalog, keys, Money};
//!
//! let catalog = builtin_catalog();
//! let bowl = SelectionState::new()
//!     .with_single(keys::NOODLE_BASE, "Forbidden Ramen")
//!     .with_single(keys::SAUCE_BROTH, "Miso");
//!
//! let mut cart = Cart::new();
//! cart.add_line_item(&bowl, &catalog).unwrap();
//!
//! let total = cart.compute_order_total(DeliveryOption::Delivery);
//! assert_eq!(total.total, Money::from_cents(250 + 399));
//! ```

#![warn(unreachable_pub)]

pub mod cart;
pub mod error;
pub mod line_item;

// Re-exports
pub use cart::{BreakdownRow, Cart, CartPolicy, DeliveryOption, OrderTotal, DEFAULT_DELIVERY_FEE};
pub use error::CartError;
pub use line_item::{LineItem, NamePolicy, OrderDetails};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for cart handling
    pub use crate::{Cart, CartError, DeliveryOption, LineItem, OrderDetails, OrderTotal};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
