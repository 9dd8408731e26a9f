//! Basket and basket line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A snapshot of the shopping basket.
///
/// Every update returns a new snapshot and leaves `self` untouched, so the
/// view can detect changes by comparing the old and new values.
///
/// Stock levels are not consulted when adding. A basket line may ask for more
/// units than the catalog holds; see [`BasketLine::exceeds_stock`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Basket {
    /// Lines in the order their products were first added.
    lines: Vec<BasketLine>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the product gains one unit and keeps the price it
    /// was first added at. Otherwise a new line is appended with the
    /// product's current name and price.
    #[must_use]
    pub fn with_added(&self, product: &Product) -> Basket {
        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|line| line.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => lines.push(BasketLine::new(product)),
        }

        Basket { lines }
    }

    /// Remove one unit of the product, dropping its line at zero.
    ///
    /// Removing a product that has no line returns an identical basket.
    #[must_use]
    pub fn with_removed_one(&self, product_id: ProductId) -> Basket {
        let mut lines = self.lines.clone();

        if let Some(position) = lines.iter().position(|line| line.product_id == product_id) {
            if lines[position].quantity <= 1 {
                lines.remove(position);
            } else {
                lines[position].quantity -= 1;
            }
        }

        Basket { lines }
    }

    /// Sum of price times quantity over all lines.
    ///
    /// Recomputed from the lines on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(BasketLine::subtotal).sum()
    }

    /// All lines.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&BasketLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Units of a product in the basket (zero if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map(|line| line.quantity).unwrap_or(0)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Check if basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A line in the basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasketLine {
    /// Product in the catalog.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price when the line was created.
    pub unit_price: Money,
    /// Quantity, at least one.
    pub quantity: u32,
}

impl BasketLine {
    /// Create a single-unit line for a product.
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Whether this line asks for more units than `product` has in stock.
    pub fn exceeds_stock(&self, product: &Product) -> bool {
        self.quantity > product.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product::new(1, "Apple", Money::new(100)).with_quantity(5)
    }

    fn banana() -> Product {
        Product::new(2, "Banana", Money::new(50)).with_quantity(0)
    }

    #[test]
    fn test_basket_creation() {
        let basket = Basket::new();
        assert!(basket.is_empty());
        assert!(basket.total().is_zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let basket = Basket::new().with_added(&apple()).with_added(&apple());

        assert_eq!(basket.lines().len(), 1);
        assert_eq!(basket.quantity_of(ProductId::new(1)), 2);
        assert_eq!(basket.total(), Money::new(200));
    }

    #[test]
    fn test_remove_one_then_line() {
        let basket = Basket::new().with_added(&apple()).with_added(&apple());

        let basket = basket.with_removed_one(ProductId::new(1));
        assert_eq!(basket.quantity_of(ProductId::new(1)), 1);
        assert_eq!(basket.total(), Money::new(100));

        let basket = basket.with_removed_one(ProductId::new(1));
        assert!(basket.is_empty());
        assert!(basket.line(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let basket = Basket::new().with_added(&apple());
        let after = basket.with_removed_one(ProductId::new(99));
        assert_eq!(after, basket);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let empty = Basket::new();
        let one = empty.with_added(&apple());
        let two = one.with_added(&apple());

        assert!(empty.is_empty());
        assert_eq!(one.quantity_of(ProductId::new(1)), 1);
        assert_eq!(two.quantity_of(ProductId::new(1)), 2);
    }

    #[test]
    fn test_price_snapshot_at_add_time() {
        let basket = Basket::new().with_added(&apple());
        let repriced = Product::new(1, "Apple", Money::new(999));
        let basket = basket.with_added(&repriced);

        let line = basket.line(ProductId::new(1)).unwrap();
        assert_eq!(line.unit_price, Money::new(100));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let basket = Basket::new()
            .with_added(&banana())
            .with_added(&apple())
            .with_added(&banana());

        let ids: Vec<u64> = basket.lines().iter().map(|l| l.product_id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(basket.item_count(), 3);
        assert_eq!(basket.total(), Money::new(200));
    }

    #[test]
    fn test_stock_not_enforced() {
        let basket = Basket::new().with_added(&banana());
        let line = basket.line(ProductId::new(2)).unwrap();
        assert_eq!(line.quantity, 1);
        assert!(line.exceeds_stock(&banana()));
        assert!(!basket.with_added(&apple()).line(ProductId::new(1)).unwrap().exceeds_stock(&apple()));
    }
}
