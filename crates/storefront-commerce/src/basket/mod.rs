//! Shopping basket module.
//!
//! The basket ledger: immutable snapshots of the selected products and their
//! quantities, with a running total.

mod basket;

pub use basket::{Basket, BasketLine};
