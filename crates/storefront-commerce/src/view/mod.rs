//! View module.
//!
//! The state container a front end holds, and text renderers for it.

mod render;
mod state;

pub use render::{render_basket, render_product_row, stock_status, EMPTY_BASKET};
pub use state::{Action, ViewState};
