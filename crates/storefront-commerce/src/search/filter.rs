//! Listing filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Name contains this case-folded needle.
    Text(String),
    /// Only show in-stock items.
    InStock,
}

impl Filter {
    /// Create a name filter. The needle is case-folded once here.
    pub fn text(term: &str) -> Self {
        Filter::Text(term.to_lowercase())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => product.name.to_lowercase().contains(needle.as_str()),
            Filter::InStock => product.is_in_stock(),
        }
    }
}
