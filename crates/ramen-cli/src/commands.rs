//! Subcommand handlers

use anyhow::{bail, Context};
use clap::ArgMatches;
use ramen_builder::{visible_choices, DietaryFilters};
use ramen_cart::{BreakdownRow, DeliveryOption, LineItem, OrderTotal};
use ramen_catalog::{Catalog, Choice, Money};
use ramen_core::{OrderSession, Storefront, StorefrontConfig};
use serde::Serialize;
use std::path::PathBuf;

/// Parse `CATEGORY=CHOICE`
pub(crate) fn parse_pick(raw: &str) -> Result<(String, String), String> {
    let (key, name) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=CHOICE, got '{raw}'"))?;
    let (key, name) = (key.trim(), name.trim());
    if key.is_empty() || name.is_empty() {
        return Err(format!("expected CATEGORY=CHOICE, got '{raw}'"));
    }
    Ok((key.to_string(), name.to_string()))
}

fn load_config(args: &ArgMatches) -> anyhow::Result<StorefrontConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => StorefrontConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StorefrontConfig::default(),
    };
    if let Some(path) = args.get_one::<PathBuf>("catalog") {
        config = config.with_catalog_path(path);
    }
    Ok(config)
}

async fn open_session(args: &ArgMatches) -> anyhow::Result<OrderSession> {
    let storefront = Storefront::new(load_config(args)?).context("invalid storefront config")?;
    let session = storefront.open_session().await;
    if session.origin().is_fallback() {
        eprintln!("note: catalog unavailable, showing the built-in menu");
    }
    Ok(session)
}

fn apply_picks(session: &mut OrderSession, args: &ArgMatches) -> anyhow::Result<()> {
    for (key, name) in args
        .get_many::<(String, String)>("pick")
        .into_iter()
        .flatten()
    {
        session
            .toggle(key, name)
            .with_context(|| format!("cannot pick {key}={name}"))?;
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn tag_list(choice: &Choice) -> String {
    choice
        .tags
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_rows(rows: &[BreakdownRow]) {
    for row in rows {
        let marker = if row.known { "" } else { "  (no longer on the menu)" };
        println!("  {:<24} {:>8}{marker}", row.label, row.price.to_string());
    }
}

#[derive(Serialize)]
struct MenuStep<'a> {
    key: &'a str,
    label: &'a str,
    multi: bool,
    required: bool,
    choices: Vec<&'a Choice>,
}

fn menu_steps<'a>(catalog: &'a Catalog, filters: &DietaryFilters) -> Vec<MenuStep<'a>> {
    catalog
        .steps()
        .map(|category| MenuStep {
            key: &category.key,
            label: &category.label,
            multi: category.multi,
            required: category.is_required(),
            choices: visible_choices(&category.choices, filters).collect(),
        })
        .collect()
}

/// `menu`: list steps with the choices the filters admit
pub(crate) async fn menu(args: &ArgMatches) -> anyhow::Result<()> {
    let session = open_session(args).await?;
    let filters = DietaryFilters::none()
        .with_vegetarian_only(args.get_flag("vegetarian"))
        .with_gluten_free_only(args.get_flag("gluten-free"));
    let steps = menu_steps(session.catalog(), &filters);

    if args.get_flag("json") {
        return print_json(&steps);
    }

    for (i, step) in steps.iter().enumerate() {
        let cardinality = if step.multi { "pick any" } else { "pick one" };
        let requirement = if step.required { ", required" } else { "" };
        println!("{}. {} [{}] ({cardinality}{requirement})", i + 1, step.label, step.key);
        if step.choices.is_empty() {
            println!("   (nothing matches the active filters)");
        }
        for choice in &step.choices {
            println!(
                "   {} {:<20} {:>7}  {}",
                choice.icon,
                choice.name,
                choice.price.to_string(),
                tag_list(choice)
            );
        }
        println!();
    }
    Ok(())
}

#[derive(Serialize)]
struct Quote {
    preview: LineItem,
    breakdown: Vec<BreakdownRow>,
    missing: Vec<String>,
}

/// `quote`: price the picks without adding them to a cart
pub(crate) async fn quote(args: &ArgMatches) -> anyhow::Result<()> {
    let mut session = open_session(args).await?;
    apply_picks(&mut session, args)?;

    let quote = Quote {
        preview: session.preview(),
        breakdown: session.preview_breakdown(),
        missing: session.builder().missing_required(),
    };

    if args.get_flag("json") {
        return print_json(&quote);
    }

    println!("{}", quote.preview.name());
    print_rows(&quote.breakdown);
    println!("  {:<24} {:>8}", "Total", quote.preview.price().to_string());
    if !quote.missing.is_empty() {
        println!();
        println!("Still needed before ordering: {}", quote.missing.join(", "));
    }
    Ok(())
}

#[derive(Serialize)]
struct OrderSummary<'a> {
    items: &'a [LineItem],
    delivery: DeliveryOption,
    special_instructions: &'a str,
    totals: OrderTotal,
}

/// `order`: finish the picks into the cart `--bowls` times
pub(crate) async fn order(args: &ArgMatches) -> anyhow::Result<()> {
    let mut session = open_session(args).await?;
    let bowls = args.get_one::<u32>("bowls").copied().unwrap_or(1);
    tracing::debug!(bowls, "building order");

    for _ in 0..bowls {
        apply_picks(&mut session, args)?;
        if !session.builder().can_finalize() {
            bail!(
                "bowl is incomplete, add a pick for: {}",
                session.builder().missing_required().join(", ")
            );
        }
        session.finish()?;
    }

    if args.get_flag("delivery") {
        session.set_delivery(DeliveryOption::Delivery);
    }
    if let Some(note) = args.get_one::<String>("note") {
        session.cart_mut().set_special_instructions(note.as_str());
    }

    let cart = session.cart();
    let summary = OrderSummary {
        items: cart.items(),
        delivery: cart.delivery(),
        special_instructions: cart.special_instructions(),
        totals: cart.order_total(),
    };

    if args.get_flag("json") {
        return print_json(&summary);
    }

    for (index, item) in summary.items.iter().enumerate() {
        println!("#{} {}  {}", index + 1, item.name(), item.price());
        print_rows(&session.breakdown(index)?);
    }
    println!();
    println!("Subtotal      {:>8}", summary.totals.subtotal.to_string());
    if summary.totals.delivery_fee > Money::ZERO {
        println!("Delivery fee  {:>8}", summary.totals.delivery_fee.to_string());
    }
    println!("Total         {:>8}  ({})", summary.totals.total.to_string(), summary.delivery);
    if !summary.special_instructions.is_empty() {
        println!("Note: {}", summary.special_instructions);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramen_catalog::builtin_catalog;

    #[test]
    fn picks_split_on_the_first_equals() {
        assert_eq!(
            parse_pick("noodleBase = Neo Udon"),
            Ok(("noodleBase".to_string(), "Neo Udon".to_string()))
        );
        assert_eq!(
            parse_pick("garnish=A=B"),
            Ok(("garnish".to_string(), "A=B".to_string()))
        );
        assert!(parse_pick("Neo Udon").is_err());
        assert!(parse_pick("protein=").is_err());
    }

    #[test]
    fn menu_steps_follow_filters() {
        let catalog = builtin_catalog();
        let filters = DietaryFilters::none().with_gluten_free_only(true);
        let steps = menu_steps(&catalog, &filters);

        assert_eq!(steps.len(), 5);
        assert!(steps[0].required);
        assert_eq!(steps[0].choices.len(), 1);
        assert_eq!(steps[4].choices.len(), 0);
    }

    #[test]
    fn config_file_and_catalog_override_combine() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[pricing]\nbase_price = 3.0\n").unwrap();

        let matches = crate::cli()
            .try_get_matches_from([
                "forbidden-ramen",
                "menu",
                "--config",
                file.path().to_str().unwrap(),
                "--catalog",
                "menu.json",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = load_config(args).unwrap();

        assert_eq!(config.pricing.base_price, Money::from_cents(300));
        assert_eq!(config.catalog.path, Some(PathBuf::from("menu.json")));
    }
}
