//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::search::{QueryParams, SortOption};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial listing settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Settings applied to a fresh listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Sort code (e.g. "AtoZ" or "price-asc").
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Start with the in-stock filter on.
    #[serde(default)]
    pub in_stock_only: bool,
}

fn default_sort() -> String {
    SortOption::default().code().to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            in_stock_only: false,
        }
    }
}

impl ViewConfig {
    /// Query parameters a new listing starts from.
    pub fn initial_params(&self) -> QueryParams {
        QueryParams::new()
            .with_sort(SortOption::from(self.default_sort.as_str()))
            .with_in_stock_only(self.in_stock_only)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "storefront=info,storefront_commerce=warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# JSON array of products: id, name, price, category, quantity, rating, image_link.
# Leave unset to use the bundled catalog.
# path = "products.json"

[view]
# One of: AtoZ, ZtoA, £LtoH, £HtoL, *LtoH, *HtoL
# (or name-asc, name-desc, price-asc, price-desc, rating-asc, rating-desc)
default_sort = "AtoZ"
in_stock_only = false

[log]
filter = "storefront=info,storefront_commerce=warn"
"#
    .to_string()
}
