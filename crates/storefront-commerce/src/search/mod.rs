//! Search module.
//!
//! Contains the query parameters, filters and sort options, and the pure
//! pipeline that turns the catalog into the displayed listing.

mod collate;
mod engine;
mod filter;
mod query;
mod results;

pub use collate::collate;
pub use engine::query;
pub use filter::Filter;
pub use query::{QueryParams, SortOption};
pub use results::ResultSummary;
