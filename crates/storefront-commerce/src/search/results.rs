//! Result count summary shown above the listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many products a listing shows, and whether a search produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSummary {
    /// Number of products in the listing.
    pub count: usize,
    /// Whether a search term was active.
    pub searching: bool,
}

impl ResultSummary {
    pub fn new(count: usize, searching: bool) -> Self {
        Self { count, searching }
    }

    /// Label for the result indicator.
    ///
    /// Without a search term the listing is a count of "Products"; with one
    /// it counts "Results", and an empty search says so explicitly.
    pub fn label(&self) -> String {
        match (self.searching, self.count) {
            (false, 1) => "1 Product".to_string(),
            (false, n) => format!("{} Products", n),
            (true, 0) => "No search results found".to_string(),
            (true, 1) => "1 Result".to_string(),
            (true, n) => format!("{} Results", n),
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_labels() {
        assert_eq!(ResultSummary::new(1, false).label(), "1 Product");
        assert_eq!(ResultSummary::new(20, false).label(), "20 Products");
        assert_eq!(ResultSummary::new(0, false).label(), "0 Products");
    }

    #[test]
    fn test_search_labels() {
        assert_eq!(ResultSummary::new(0, true).label(), "No search results found");
        assert_eq!(ResultSummary::new(1, true).label(), "1 Result");
        assert_eq!(ResultSummary::new(3, true).to_string(), "3 Results");
    }
}
