//! Lookup and recommendation engine.
//!
//! Every operation reads the catalog and returns a freshly allocated
//! result; nothing here mutates the catalog.

mod recommend;

pub use recommend::{Recommendations, PREVIEW_LEN};

use crate::catalog::{Catalog, Product};
use crate::favorites::FavoriteSet;
use crate::ids::ProductId;

impl Catalog {
    /// Case-insensitive substring search over name and brand.
    ///
    /// An empty term returns the whole catalog. Order follows the catalog.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        if term.is_empty() {
            return self.products().iter().collect();
        }

        let term = term.to_lowercase();
        let hits: Vec<&Product> = self
            .products()
            .iter()
            .filter(|p| p.matches_lowercase(&term))
            .collect();
        tracing::debug!(term = %term, hits = hits.len(), "catalog search");
        hits
    }

    /// Look a product up by id. `None` means not found.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.index_of_id(id).map(|i| &self.products()[i])
    }

    /// Look a product up by barcode. `None` means not found.
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        let found = self.index_of_barcode(barcode).map(|i| &self.products()[i]);
        if found.is_none() {
            tracing::debug!(barcode, "no product for barcode");
        }
        found
    }

    /// Products bookmarked in `favorites`, in catalog order.
    pub fn favorites<F: FavoriteSet + ?Sized>(&self, favorites: &F) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| favorites.is_favorite(p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Grade;
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "111", "Volle Melk", "Acme", "zuivel").with_rating(Grade::A),
            Product::new(2, "222", "Yoghurt", "Acme", "zuivel").with_rating(Grade::D),
            Product::new(3, "333", "Karnemelk", "Zeta", "zuivel").with_rating(Grade::BPlus),
        ])
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.search("")), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_matches_brand_and_name() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.search("acme")), vec![1, 2]);
        assert_eq!(ids(&catalog.search("zeta")), vec![3]);
        assert_eq!(ids(&catalog.search("melk")), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.search("ACME")), ids(&catalog.search("acme")));
        assert_eq!(ids(&catalog.search("YoGh")), vec![2]);
    }

    #[test]
    fn test_search_without_hits() {
        assert!(catalog().search("thee").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_id(ProductId::new(3)).unwrap().brand, "Zeta");
        assert!(catalog.find_by_id(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_find_by_barcode() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_barcode("222").unwrap().id, ProductId::new(2));
        assert!(catalog.find_by_barcode("000000").is_none());
    }

    #[test]
    fn test_favorites_in_catalog_order() {
        let catalog = catalog();
        let favorites: HashSet<ProductId> = [ProductId::new(3), ProductId::new(1)].into();
        assert_eq!(ids(&catalog.favorites(&favorites)), vec![1, 3]);
    }
}
