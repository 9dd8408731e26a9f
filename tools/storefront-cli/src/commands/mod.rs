//! CLI command implementations.

pub mod basket;
pub mod config;
pub mod list;
pub mod shop;
pub mod sorts;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show products whose name contains this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort code (see `storefront sorts`). Unknown codes keep catalog order.
    #[arg(long)]
    pub sort: Option<String>,

    /// Only show products in stock.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the basket command.
#[derive(Args)]
pub struct BasketArgs {
    /// Operations applied in order: `add:<id>` or `remove:<id>`.
    #[arg(required = true)]
    pub ops: Vec<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Initial search term.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with the basket panel open.
    #[arg(long)]
    pub open_basket: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
