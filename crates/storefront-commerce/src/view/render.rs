//! Plain-text rendering of listings and the basket panel.

use crate::basket::Basket;
use crate::catalog::Product;

/// Message shown in place of an empty basket.
pub const EMPTY_BASKET: &str = "Your basket is empty";

/// Stock status as shown next to a product.
pub fn stock_status(product: &Product) -> String {
    if product.is_in_stock() {
        format!("In stock ({})", product.quantity)
    } else {
        "Out of stock".to_string()
    }
}

/// One listing row: id, name, category, price, rating, stock.
pub fn render_product_row(product: &Product) -> String {
    format!(
        "#{:<4} {:<32} {:<12} {:>9}  \u{2605}{:.1}  {}",
        product.id.get(),
        product.name,
        product.category,
        product.price.display(),
        product.rating,
        stock_status(product)
    )
}

/// The basket panel: one row per line and the total, or the empty message.
pub fn render_basket(basket: &Basket) -> Vec<String> {
    if basket.is_empty() {
        return vec![EMPTY_BASKET.to_string()];
    }

    let mut rows: Vec<String> = basket
        .lines()
        .iter()
        .map(|line| {
            format!(
                "#{:<4} {:<32} x{:<4} {:>9}",
                line.product_id.get(),
                line.name,
                line.quantity,
                line.subtotal().display()
            )
        })
        .collect();
    rows.push(format!("Total: {}", basket.total().display()));
    rows
}
