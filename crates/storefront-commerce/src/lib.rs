//! Catalog querying and basket bookkeeping for the storefront.
//!
//! This crate holds all storefront logic, independent of any front end:
//!
//! - **Catalog**: the read-only product collection
//! - **Search**: filter by name and stock, sort by name, price or rating
//! - **Basket**: immutable basket snapshots with a running total
//! - **View**: a state container that front ends dispatch actions to
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new(1, "Apple", Money::new(100)).with_quantity(5),
//!     Product::new(2, "Banana", Money::new(50)),
//! ])?;
//!
//! let params = QueryParams::new().with_in_stock_only(true);
//! let listing = query(catalog.products(), &params);
//! assert_eq!(listing.len(), 1);
//!
//! let view = ViewState::new(Arc::new(catalog))
//!     .dispatch(Action::AddToBasket(ProductId::new(1)))
//!     .dispatch(Action::AddToBasket(ProductId::new(1)));
//! assert_eq!(view.basket().total().display(), "\u{00a3}2.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod basket;
pub mod catalog;
pub mod search;
pub mod view;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{query, Filter, QueryParams, ResultSummary, SortOption};

    // Basket
    pub use crate::basket::{Basket, BasketLine};

    // View
    pub use crate::view::{Action, ViewState};
}
