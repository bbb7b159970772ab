use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .value_parser(value_parser!(PathBuf))
        .help("JSON catalog file (overrides the config)")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Storefront config TOML")
}

fn pick_arg() -> Arg {
    Arg::new("pick")
        .long("pick")
        .short('p')
        .action(ArgAction::Append)
        .value_parser(commands::parse_pick)
        .help("Choice to pick, as CATEGORY=CHOICE (repeatable, applied in order)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cli() -> Command {
    Command::new("forbidden-ramen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Forbidden Ramen bowl configurator")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("menu")
                .about("List the menu steps and their choices")
                .arg(catalog_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("vegetarian")
                        .long("vegetarian")
                        .action(ArgAction::SetTrue)
                        .help("Only show choices tagged vegetarian"),
                )
                .arg(
                    Arg::new("gluten-free")
                        .long("gluten-free")
                        .action(ArgAction::SetTrue)
                        .help("Only show choices tagged gluten free"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("quote")
                .about("Price a bowl without ordering it")
                .arg(pick_arg())
                .arg(catalog_arg())
                .arg(config_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("order")
                .about("Build bowls into a cart and print the order")
                .arg(pick_arg().required(true))
                .arg(
                    Arg::new("bowls")
                        .long("bowls")
                        .default_value("1")
                        .value_parser(value_parser!(u32).range(1..=20))
                        .help("Number of identical bowls"),
                )
                .arg(
                    Arg::new("delivery")
                        .long("delivery")
                        .action(ArgAction::SetTrue)
                        .help("Deliver instead of takeout"),
                )
                .arg(
                    Arg::new("note")
                        .long("note")
                        .help("Special instructions for the kitchen"),
                )
                .arg(catalog_arg())
                .arg(config_arg())
                .arg(json_arg()),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

async fn dispatch(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("menu", args)) => commands::menu(args).await,
        Some(("quote", args)) => commands::quote(args).await,
        Some(("order", args)) => commands::order(args).await,
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));
    dispatch(&matches).await
}
