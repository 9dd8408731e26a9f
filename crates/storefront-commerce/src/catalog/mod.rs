//! Product catalog module.
//!
//! Contains the product type and the read-only catalog it is loaded into.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
