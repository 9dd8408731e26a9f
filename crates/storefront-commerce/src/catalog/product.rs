//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded. (De)serialization goes through the
/// catalog file schema, so prices are validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub quantity: u32,
    /// Average customer rating.
    pub rating: f64,
    /// Image reference (path or URI).
    pub image: String,
}

impl Product {
    /// Create a new product with no category or image.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            category: String::new(),
            quantity: 0,
            rating: 0.0,
            image: String::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Check if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// A product as it appears in catalog JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: f64,
    #[serde(default)]
    category: String,
    #[serde(default)]
    quantity: u32,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    image_link: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Money::from_f64(record.price)
            .filter(|price| !price.is_negative())
            .ok_or(CommerceError::InvalidPrice {
                product_id: record.id,
                price: record.price,
            })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            price,
            category: record.category,
            quantity: record.quantity,
            rating: record.rating,
            image: record.image_link,
        })
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_f64(),
            category: product.category,
            quantity: product.quantity,
            rating: product.rating,
            image_link: product.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product {
            category: "Fruit".to_string(),
            ..Product::new(1, "Apple", Money::new(100))
        }
        .with_quantity(5)
            .with_rating(4.0);
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, "Fruit");
        assert!(product.is_in_stock());
        assert!(!product.clone().with_quantity(0).is_in_stock());
    }

    #[test]
    fn test_product_from_catalog_json() {
        let json = r#"{
            "id": 3,
            "name": "Desk Lamp",
            "price": 24.5,
            "category": "Home",
            "quantity": 0,
            "rating": 3.5,
            "image_link": "https://img.example/lamp.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Money::new(2450));
        assert_eq!(product.image, "https://img.example/lamp.png");
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_product_serializes_in_catalog_schema() {
        let product = Product {
            image: "mug.png".to_string(),
            ..Product::new(9, "Mug", Money::new(799))
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(7.99));
        assert_eq!(value["image_link"], "mug.png");
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{"id": 1, "name": "Broken", "price": -1.0}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid price"));
    }
}
