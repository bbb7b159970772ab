//! Order sessions
//!
//! A [`Storefront`] owns the configuration and the catalog loader and hands out
//! [`OrderSession`]s. Each session owns one builder and one cart; nothing is
//! shared between sessions except the cached catalog.

use crate::config::StorefrontConfig;
use crate::error::{ConfigError, RamenError};
use ramen_builder::{DietaryFilters, RamenBuilder};
use ramen_cart::{BreakdownRow, Cart, CartPolicy, DeliveryOption, LineItem, OrderDetails, OrderTotal};
use ramen_catalog::{Catalog, CatalogLoader, CatalogOrigin, CatalogSource, LoadedCatalog, Money};
use std::sync::Arc;

/// Configured storefront
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    loader: CatalogLoader,
}

impl Storefront {
    /// Create storefront reading the catalog the configuration names
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let source = config.catalog_source();
        Self::with_source(config, source)
    }

    /// Create storefront over an explicit catalog source
    pub fn with_source(
        config: StorefrontConfig,
        source: Arc<dyn CatalogSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let loader = config.catalog_loader(source);
        Ok(Self { config, loader })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Current catalog, loading it on first use
    pub async fn catalog(&self) -> LoadedCatalog {
        self.loader.load().await
    }

    /// Reload the catalog from its source
    pub async fn refresh_catalog(&self) -> LoadedCatalog {
        self.loader.refresh().await
    }

    /// Start a session on the current catalog
    pub async fn open_session(&self) -> OrderSession {
        let loaded = self.loader.load().await;
        tracing::info!(
            source = %self.loader.source_name(),
            fallback = loaded.origin.is_fallback(),
            "order session opened"
        );
        OrderSession::new(loaded, self.config.cart_policy())
    }
}

/// One customer's builder and cart
#[derive(Debug, Clone)]
pub struct OrderSession {
    loaded: LoadedCatalog,
    builder: RamenBuilder,
    cart: Cart,
}

impl OrderSession {
    /// Create session over a loaded catalog
    #[must_use]
    pub fn new(loaded: LoadedCatalog, policy: CartPolicy) -> Self {
        let builder = RamenBuilder::new(Arc::clone(&loaded.catalog));
        Self {
            loaded,
            builder,
            cart: Cart::with_policy(policy),
        }
    }

    /// Catalog in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.loaded.catalog
    }

    /// Where the catalog came from
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &CatalogOrigin {
        &self.loaded.origin
    }

    /// Bowl in progress
    #[inline]
    #[must_use]
    pub fn builder(&self) -> &RamenBuilder {
        &self.builder
    }

    /// Bowl in progress, for navigation and filters
    #[inline]
    pub fn builder_mut(&mut self) -> &mut RamenBuilder {
        &mut self.builder
    }

    /// Finalized bowls
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Finalized bowls, for delivery and instructions
    #[inline]
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Pick or toggle a choice
    pub fn toggle(&mut self, key: &str, name: &str) -> Result<(), RamenError> {
        Ok(self.builder.toggle_choice(key, name)?)
    }

    /// Replace the dietary filters
    pub fn set_filters(&mut self, filters: DietaryFilters) {
        self.builder.set_filters(filters);
    }

    /// Price of the bowl in progress
    #[must_use]
    pub fn live_total(&self) -> Money {
        self.cart
            .policy()
            .pricing
            .total(self.builder.selections(), &self.loaded.catalog)
    }

    /// The line item the bowl in progress would become, without adding it
    #[must_use]
    pub fn preview(&self) -> LineItem {
        let details = OrderDetails::from_selections(self.builder.selections());
        let name = self.cart.policy().naming.derive_name(&details);
        LineItem::new(name, self.live_total(), details)
    }

    /// Breakdown rows of the bowl in progress
    #[must_use]
    pub fn preview_breakdown(&self) -> Vec<BreakdownRow> {
        self.cart
            .line_item_breakdown(&self.preview(), &self.loaded.catalog)
    }

    /// Add the bowl to the cart and start a fresh one
    ///
    /// Filters survive the restart.
    pub fn finish(&mut self) -> Result<&LineItem, RamenError> {
        let item = self
            .cart
            .add_line_item(self.builder.selections(), &self.loaded.catalog)?;
        self.builder.restart();
        Ok(item)
    }

    /// Remove a line item by position
    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem, RamenError> {
        Ok(self.cart.remove_line_item(index)?)
    }

    /// Breakdown of a cart line item against the current catalog
    pub fn breakdown(&self, index: usize) -> Result<Vec<BreakdownRow>, RamenError> {
        let item = self
            .cart
            .items()
            .get(index)
            .ok_or(ramen_cart::CartError::IndexOutOfRange {
                index,
                len: self.cart.len(),
            })?;
        Ok(self.cart.line_item_breakdown(item, &self.loaded.catalog))
    }

    /// Totals for the cart's delivery option
    #[must_use]
    pub fn order_total(&self) -> OrderTotal {
        self.cart.order_total()
    }

    /// Choose the delivery option
    pub fn set_delivery(&mut self, option: DeliveryOption) {
        self.cart.set_delivery(option);
    }

    /// Discard the bowl in progress
    pub fn restart(&mut self) {
        self.builder.restart();
    }

    /// Switch to a new catalog
    ///
    /// The bowl in progress is discarded since its names may no longer exist;
    /// the cart keeps its frozen items.
    pub fn set_catalog(&mut self, loaded: LoadedCatalog) {
        let filters = self.builder.filters();
        self.builder = RamenBuilder::new(Arc::clone(&loaded.catalog)).with_filters(filters);
        self.loaded = loaded;
        tracing::info!(steps = self.loaded.catalog.len(), "session catalog replaced");
    }
}
