//! End-to-end order session tests
//!
//! Catalog loading and fallback, building bowls, cart totals and menu changes
//! after items were ordered.

use ramen_builder::DietaryFilters;
use ramen_cart::DeliveryOption;
use ramen_catalog::{keys, CatalogOrigin, JsonPayloadSource, MenuStore, Money};
use ramen_core::{RamenError, Storefront, StorefrontConfig};
use ramen_test_utils::{
    fixture_catalog, fixture_catalog_json, minimal_catalog, mock_cart_items, FailingSource,
};
use std::io::Write;
use std::sync::Arc;

fn storefront_over(catalog_json: String) -> Storefront {
    let source = Arc::new(JsonPayloadSource::new("api", catalog_json));
    Storefront::with_source(StorefrontConfig::default(), source).unwrap()
}

/// Ramen + Chicken + Tofu + Miso is 6.25, dropping Chicken gives 4.25
#[tokio::test]
async fn test_live_total_worked_example() {
    let storefront = storefront_over(minimal_catalog().to_json().unwrap());
    let mut session = storefront.open_session().await;
    assert_eq!(session.origin(), &CatalogOrigin::Source("api".into()));

    session.toggle(keys::NOODLE_BASE, "Ramen").unwrap();
    session.toggle(keys::PROTEIN, "Chicken").unwrap();
    session.toggle(keys::PROTEIN, "Tofu").unwrap();
    session.toggle(keys::SAUCE_BROTH, "Miso").unwrap();
    assert_eq!(session.live_total(), Money::from_cents(625));

    session.toggle(keys::PROTEIN, "Chicken").unwrap();
    assert_eq!(session.live_total(), Money::from_cents(425));
}

/// A failing source yields the built-in menu instead of an error
#[tokio::test]
async fn test_failed_fetch_uses_builtin_menu() {
    let source = Arc::new(FailingSource::new("connection refused"));
    let storefront = Storefront::with_source(StorefrontConfig::default(), source).unwrap();
    let mut session = storefront.open_session().await;

    assert!(session.origin().is_fallback());
    assert_eq!(session.catalog().len(), 5);
    session.toggle(keys::NOODLE_BASE, "Forbidden Ramen").unwrap();
}

/// A payload without any usable category also falls back
#[tokio::test]
async fn test_malformed_payload_uses_builtin_menu() {
    let storefront = storefront_over(r#"{ "success": false, "error": "db down" }"#.to_string());
    let session = storefront.open_session().await;

    match session.origin() {
        CatalogOrigin::Fallback { reason, .. } => assert!(reason.contains("malformed")),
        other => panic!("expected fallback, got {other:?}"),
    }
}

/// Config and catalog read from disk
#[tokio::test]
async fn test_config_and_catalog_files() {
    let mut menu = tempfile::NamedTempFile::new().unwrap();
    menu.write_all(fixture_catalog_json().as_bytes()).unwrap();

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config_file,
        "[pricing]\nbase_price = 3.00\ndelivery_fee = 2.50\n\n[catalog]\npath = {:?}",
        menu.path().display().to_string()
    )
    .unwrap();

    let config = StorefrontConfig::from_file(config_file.path()).unwrap();
    let storefront = Storefront::new(config).unwrap();
    let mut session = storefront.open_session().await;
    assert!(!session.origin().is_fallback());

    session.toggle(keys::NOODLE_BASE, "Rice Noodles").unwrap();
    session.toggle(keys::SAUCE_BROTH, "Clear Dashi").unwrap();
    assert_eq!(session.live_total(), Money::from_cents(300 + 150 + 50));

    session.finish().unwrap();
    session.set_delivery(DeliveryOption::Delivery);
    assert_eq!(session.order_total().total, Money::from_cents(500 + 250));
}

/// The cascade fills an unset broth but keeps an explicit one
#[tokio::test]
async fn test_cascade_precedence_in_session() {
    let storefront = storefront_over(fixture_catalog_json());

    let mut first = storefront.open_session().await;
    first.toggle(keys::NOODLE_BASE, "Neo Udon").unwrap();
    assert!(first.builder().is_selected(keys::SAUCE_BROTH, "Spicy Miso"));
    assert!(first.builder().is_selected(keys::GARDEN_PICKS, "Bok Choy"));

    let mut second = storefront.open_session().await;
    second.toggle(keys::SAUCE_BROTH, "Clear Dashi").unwrap();
    second.toggle(keys::NOODLE_BASE, "Neo Udon").unwrap();
    assert!(second.builder().is_selected(keys::SAUCE_BROTH, "Clear Dashi"));
}

/// Filters hide choices without dropping them from the bowl or the price
#[tokio::test]
async fn test_filters_keep_selection_and_price() {
    let storefront = storefront_over(fixture_catalog_json());
    let mut session = storefront.open_session().await;
    session.toggle(keys::NOODLE_BASE, "Forbidden Ramen").unwrap();
    session.toggle(keys::PROTEIN, "Chicken").unwrap();
    let before = session.live_total();

    session.set_filters(DietaryFilters::none().with_vegetarian_only(true));
    session.builder_mut().jump_to(1).unwrap();

    assert!(session.builder().visible_choices().all(|c| c.name != "Chicken"));
    assert!(session.builder().is_selected(keys::PROTEIN, "Chicken"));
    assert_eq!(session.live_total(), before);
}

/// Saved items: delivery 32.73, takeout 28.74, and slug names render at zero
#[tokio::test]
async fn test_mock_cart_totals_and_stale_breakdown() {
    let storefront = storefront_over(fixture_catalog_json());
    let mut session = storefront.open_session().await;
    for item in mock_cart_items() {
        session.cart_mut().push(item);
    }

    let cart = session.cart();
    assert_eq!(cart.compute_order_total(DeliveryOption::Delivery).total, Money::from_cents(3273));
    assert_eq!(cart.compute_order_total(DeliveryOption::Takeout).total, Money::from_cents(2874));

    let rows = session.breakdown(0).unwrap();
    assert_eq!(rows[0].label, "ramen");
    assert_eq!(rows[0].price, Money::from_cents(250));
    assert!(rows.iter().skip(1).all(|r| r.price == Money::ZERO && !r.known));
}

/// Removing a stale index is a recoverable error
#[tokio::test]
async fn test_stale_index_is_recoverable() {
    let storefront = storefront_over(fixture_catalog_json());
    let mut session = storefront.open_session().await;
    session.cart_mut().push(mock_cart_items().remove(0));

    let err = session.remove_line_item(3).unwrap_err();
    assert!(matches!(err, RamenError::Cart(_)));
    assert!(err.is_recoverable());
    assert!(session.breakdown(1).is_err());

    assert!(session.remove_line_item(0).is_ok());
    assert!(!session.cart().can_checkout());
}

/// Soft-deleting an ordered item: the frozen price stays, the breakdown
/// shows the item at zero after refresh
#[tokio::test]
async fn test_menu_change_after_order() {
    let store = Arc::new(MenuStore::seeded(&fixture_catalog()));
    let storefront = Storefront::with_source(StorefrontConfig::default(), store.clone()).unwrap();
    let mut session = storefront.open_session().await;

    session.toggle(keys::NOODLE_BASE, "Forbidden Ramen").unwrap();
    session.toggle(keys::PROTEIN, "Edamame").unwrap();
    session.toggle(keys::SAUCE_BROTH, "Miso").unwrap();
    let price = session.finish().unwrap().price();
    assert_eq!(price, Money::from_cents(350));

    let edamame = store.item_id(keys::PROTEIN, "Edamame").unwrap();
    store.deactivate_item(edamame).unwrap();
    session.toggle(keys::NOODLE_BASE, "Neo Udon").unwrap();

    let refreshed = storefront.refresh_catalog().await;
    assert!(refreshed.catalog.choice(keys::PROTEIN, "Edamame").is_none());
    session.set_catalog(refreshed);

    assert!(!session.builder().has_selections());
    assert_eq!(session.cart().items()[0].price(), price);

    let rows = session.breakdown(0).unwrap();
    let stale = rows.iter().find(|r| r.label == "Edamame").unwrap();
    assert_eq!(stale.price, Money::ZERO);
    assert!(!stale.known);
}
