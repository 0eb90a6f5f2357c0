//! Auro CLI - the Auro jewelry storefront from the terminal.
//!
//! Commands:
//! - `auro shop` - Browse and filter the catalog
//! - `auro product` - Show a product
//! - `auro deal` - Show the deal of the day
//! - `auro cart` - Manage the bag
//! - `auro admin` - Orders, payments, customers and the dashboard
//! - `auro config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{AdminArgs, CartArgs, ConfigArgs, DealArgs, ProductArgs, ShopArgs};
use config::{AuroConfig, LogFormat};
use context::SessionOptions;

/// Auro CLI - Browse the shop, fill the bag and run the admin console
#[derive(Parser)]
#[command(name = "auro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Browsing profile; each profile keeps its own bag and console data
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Keep nothing after the command exits
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Shop(ShopArgs),

    /// Show a product
    Product(ProductArgs),

    /// Show the deal of the day
    Deal(DealArgs),

    /// Manage the bag
    Cart(CartArgs),

    /// Store admin console
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    let options = SessionOptions {
        config_path: cli.config.clone(),
        profile: cli.profile.clone(),
        ephemeral: cli.ephemeral,
    };

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = match context::Context::load_config(options.config_path.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    init_tracing(&config, cli.verbose, cli.json);

    let ctx = match context::Context::open(config, &options, output.clone(), cwd) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Product(args) => commands::shop::run_product(args, &ctx),
        Commands::Deal(args) => commands::shop::run_deal(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber on stderr.
///
/// `RUST_LOG` wins; otherwise `--verbose` means debug and the config level
/// applies. Logs are JSON with `--json` or `log.format = "json"`.
fn init_tracing(config: &AuroConfig, verbose: bool, json: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let as_json = json || config.log.format == LogFormat::Json;
    let json_layer = as_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!as_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
