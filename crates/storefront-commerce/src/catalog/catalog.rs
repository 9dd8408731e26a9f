//! The read-only product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashMap;
use std::path::Path;

/// Dataset compiled into the crate, used when no catalog file is configured.
const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// The static collection of all products.
///
/// Built once and never mutated. Keeps the source order of the products,
/// which is the order listings fall back to when no sort applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id,
                    price: product.price.to_f64(),
                });
            }
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Look up a product by id, failing if it does not exist.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::io::Write;

    fn product(id: u64, name: &str) -> Product {
        Product::new(id, name, Money::new(100))
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog =
            Catalog::from_products(vec![product(1, "Apple"), product(2, "Banana")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Banana");
        assert!(catalog.get(ProductId::new(3)).is_none());
        assert!(matches!(
            catalog.require(ProductId::new(3)),
            Err(CommerceError::ProductNotFound(id)) if id == ProductId::new(3)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_products(vec![product(1, "Apple"), product(1, "Apricot")]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::from_products(vec![Product::new(1, "Refund", Money::new(-1))]);
        assert!(matches!(result, Err(CommerceError::InvalidPrice { .. })));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let result = Catalog::from_json_str("{\"id\": 1}");
        assert!(matches!(result, Err(CommerceError::SerializationError(_))));
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": 1, "name": "Mug", "price": 7.99, "category": "Kitchen"},
                {"id": 2, "name": "Lamp", "price": 24.5, "category": "Home"},
                {"id": 3, "name": "Kettle", "price": 30.0, "category": "Kitchen"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.categories(), vec!["Kitchen", "Home"]);
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.products().iter().any(|p| !p.is_in_stock()));
        assert!(catalog.categories().len() > 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Apple", "price": 1.0, "category": "Fruit", "quantity": 5, "rating": 4.0, "image_link": ""}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().price, Money::new(100));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/definitely/not/here.json");
        assert!(matches!(result, Err(CommerceError::Io(_))));
    }
}
