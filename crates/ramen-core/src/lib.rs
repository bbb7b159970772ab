//! Ramen Core
//!
//! Storefront configuration and order sessions. A session is where the
//! catalog, the step-by-step builder and the cart meet: picks go into the
//! builder, finishing prices the bowl and moves it into the cart.
//!
//! # Core Concepts
//!
//! - **StorefrontConfig**: Prices, naming and catalog location, from TOML
//! - **Storefront**: Configuration plus the cached, fallback-aware catalog loader
//! - **OrderSession**: One builder and one cart over a loaded catalog
//! - **RamenError**: Every error a session can return
//!
//! # Example
//!
//! ```rust
//! use ramen_core::{Storefront, StorefrontConfig};
//! use ramen_catalog::keys;
//!
//! # async fn run() -> Result<(), ramen_core::RamenError> {
//! let storefront = Storefront::new(StorefrontConfig::default())?;
//! let mut session = storefront.open_session().await;
//!
//! session.toggle(keys::NOODLE_BASE, "Neo Udon")?;
//! session.toggle(keys::SAUCE_BROTH, "Miso")?;
//! session.finish()?;
//!
//! assert!(session.cart().can_checkout());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod session;

// Re-exports
pub use config::{CatalogConfig, NamingConfig, PricingConfig, StorefrontConfig};
pub use error::{ConfigError, RamenError};
pub use session::{OrderSession, Storefront};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running order sessions
    pub use crate::{OrderSession, RamenError, Storefront, StorefrontConfig};
    pub use ramen_builder::DietaryFilters;
    pub use ramen_cart::DeliveryOption;
    pub use ramen_catalog::{keys, Money};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
