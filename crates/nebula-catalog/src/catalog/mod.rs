//! Product catalog module.
//!
//! The catalog is built once and never mutated. Lookups go through the
//! id and barcode indexes built at construction.

mod dataset;
mod product;

pub use product::{Polarity, Product, Reason};

use crate::error::CatalogError;
use crate::ids::ProductId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Immutable, in-memory collection of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
    by_barcode: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids or barcodes.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_barcode = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if let Some(prev) = by_barcode.insert(product.barcode.clone(), index) {
                return Err(CatalogError::DuplicateBarcode {
                    barcode: product.barcode.clone(),
                    first: products[prev].id,
                    second: product.id,
                });
            }
        }

        Ok(Self {
            products,
            by_id,
            by_barcode,
        })
    }

    /// Parse a JSON array of products and build a catalog from it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The built-in dataset, constructed on first use and kept for the
    /// rest of the process.
    pub fn builtin() -> &'static Catalog {
        Self::builtin_shared()
    }

    /// Shared handle to the built-in dataset, for owners that need an `Arc`.
    pub fn shared() -> Arc<Catalog> {
        Arc::clone(Self::builtin_shared())
    }

    fn builtin_shared() -> &'static Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN.get_or_init(|| Arc::new(Catalog::from_trusted(dataset::products())))
    }

    /// Index a dataset known to be valid. On a clash the first entry wins.
    fn from_trusted(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_barcode = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_id.entry(product.id).or_insert(index);
            by_barcode.entry(product.barcode.clone()).or_insert(index);
        }
        Self {
            products,
            by_id,
            by_barcode,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub(crate) fn index_of_id(&self, id: ProductId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub(crate) fn index_of_barcode(&self, barcode: &str) -> Option<usize> {
        self.by_barcode.get(barcode).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Grade;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "111", "Volle melk", "Acme", "zuivel").with_rating(Grade::A),
            Product::new(2, "222", "Yoghurt", "Acme", "zuivel").with_rating(Grade::D),
            Product::new(3, "333", "Cola", "Fizz", "frisdrank"),
        ]
    }

    #[test]
    fn test_new_indexes_products() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of_id(ProductId::new(2)), Some(1));
        assert_eq!(catalog.index_of_barcode("333"), Some(2));
        assert_eq!(catalog.index_of_barcode("444"), None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut products = sample();
        products.push(Product::new(2, "999", "Kaas", "Acme", "zuivel"));
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(2)
        ));
    }

    #[test]
    fn test_duplicate_barcode_rejected() {
        let mut products = sample();
        products.push(Product::new(4, "111", "Kaas", "Acme", "zuivel"));
        match Catalog::new(products) {
            Err(CatalogError::DuplicateBarcode { barcode, first, second }) => {
                assert_eq!(barcode, "111");
                assert_eq!(first, ProductId::new(1));
                assert_eq!(second, ProductId::new(4));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.categories(), vec!["zuivel", "frisdrank"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 1, "barcode": "1", "name": "Thee", "brand": "Leaf", "category": "thee", "rating": "B+"},
            {"id": 2, "barcode": "2", "name": "Koffie", "brand": "Bean", "category": "koffie"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].rating, Some(Grade::BPlus));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::SerializationError(_))
        ));
    }

    #[test]
    fn test_builtin_dataset_is_valid() {
        let validated = Catalog::new(dataset::products()).unwrap();
        assert_eq!(validated.len(), Catalog::builtin().len());
        assert!(!Catalog::builtin().is_empty());
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
        assert!(Arc::ptr_eq(&Catalog::shared(), &Catalog::shared()));
        assert!(std::ptr::eq(&*Catalog::shared(), Catalog::builtin()));
    }
}
