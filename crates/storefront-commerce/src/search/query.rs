//! Query parameters and sort options.

use crate::catalog::Product;
use crate::search::collate::collate;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    #[serde(rename = "AtoZ")]
    NameAsc,
    /// Sort by name Z-A.
    #[serde(rename = "ZtoA")]
    NameDesc,
    /// Sort by price, low to high.
    #[serde(rename = "\u{00a3}LtoH")]
    PriceAsc,
    /// Sort by price, high to low.
    #[serde(rename = "\u{00a3}HtoL")]
    PriceDesc,
    /// Sort by rating, low to high.
    #[serde(rename = "*LtoH")]
    RatingAsc,
    /// Sort by rating, high to low.
    #[serde(rename = "*HtoL")]
    RatingDesc,
    /// Keep catalog order.
    #[serde(rename = "none")]
    Unsorted,
}

impl SortOption {
    /// The six options offered by the sort selector, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingAsc,
        SortOption::RatingDesc,
    ];

    /// Get the selector code (e.g., "AtoZ").
    pub fn code(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "AtoZ",
            SortOption::NameDesc => "ZtoA",
            SortOption::PriceAsc => "\u{00a3}LtoH",
            SortOption::PriceDesc => "\u{00a3}HtoL",
            SortOption::RatingAsc => "*LtoH",
            SortOption::RatingDesc => "*HtoL",
            SortOption::Unsorted => "none",
        }
    }

    /// Get an ASCII alias that is easy to type on a command line.
    pub fn alias(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::Unsorted => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "By name (A - Z)",
            SortOption::NameDesc => "By name (Z - A)",
            SortOption::PriceAsc => "By price (low - high)",
            SortOption::PriceDesc => "By price (high - low)",
            SortOption::RatingAsc => "By rating (low - high)",
            SortOption::RatingDesc => "By rating (high - low)",
            SortOption::Unsorted => "Catalog order",
        }
    }

    /// Parse a selector code or alias.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        [
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::RatingAsc,
            SortOption::RatingDesc,
            SortOption::Unsorted,
        ]
        .into_iter()
        .find(|option| option.code() == code || option.alias().eq_ignore_ascii_case(code))
    }

    /// Compare two products under this ordering.
    ///
    /// Descending orders compare reversed keys, so equal keys stay `Equal`
    /// and a stable sort keeps their relative order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::NameAsc => collate(&a.name, &b.name),
            SortOption::NameDesc => collate(&b.name, &a.name),
            SortOption::PriceAsc => a.price.cmp(&b.price),
            SortOption::PriceDesc => b.price.cmp(&a.price),
            SortOption::RatingAsc => a.rating.total_cmp(&b.rating),
            SortOption::RatingDesc => b.rating.total_cmp(&a.rating),
            SortOption::Unsorted => Ordering::Equal,
        }
    }
}

/// Unrecognized codes leave the listing in catalog order.
impl From<&str> for SortOption {
    fn from(code: &str) -> Self {
        SortOption::from_code(code).unwrap_or(SortOption::Unsorted)
    }
}

/// The parameters driving the displayed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryParams {
    /// Search term, matched case-insensitively against product names.
    #[serde(default)]
    pub term: String,
    /// Only show products with stock.
    #[serde(default)]
    pub in_stock_only: bool,
    /// Sort option.
    #[serde(default)]
    pub sort: SortOption,
}

impl QueryParams {
    /// Create default parameters: no term, all stock, A-Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the in-stock flag.
    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a search term is active.
    pub fn is_searching(&self) -> bool {
        !self.term.is_empty()
    }

    /// Build the filters these parameters imply, in application order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2);
        if self.is_searching() {
            filters.push(Filter::text(&self.term));
        }
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        filters
    }
}
