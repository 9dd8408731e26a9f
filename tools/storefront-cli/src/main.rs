//! Storefront CLI - browse the catalog and fill a basket from the terminal.
//!
//! Commands:
//! - `storefront list` - Search, filter and sort the catalog
//! - `storefront basket` - Apply basket operations and print the total
//! - `storefront sorts` - List sort orders
//! - `storefront shop` - Interactive session
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BasketArgs, ConfigArgs, ListArgs, ShopArgs};

/// Storefront CLI - Browse the catalog and manage a shopping basket
#[derive(Parser)]
#[command(name = "storefront")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search
    List(ListArgs),

    /// Apply add/remove operations to an empty basket
    Basket(BasketArgs),

    /// List the available sort orders
    Sorts,

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.log, ctx.output.is_verbose());
    tracing::debug!(cwd = %ctx.cwd.display(), "storefront starting");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Basket(args) => commands::basket::run(args, &ctx),
        Commands::Sorts => commands::sorts::run(&ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
