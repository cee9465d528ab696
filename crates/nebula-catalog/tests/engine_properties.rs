//! Catalog-wide properties of the lookup and recommendation engine.

use nebula_catalog::prelude::*;
use nebula_catalog::RECOMMEND_THRESHOLD;
use std::collections::HashMap;

fn scenario() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "4000000000011", "Volle melk", "Acme", "dairy").with_rating(Grade::A),
        Product::new(2, "4000000000028", "Vla", "Acme", "dairy").with_rating(Grade::D),
        Product::new(3, "4000000000035", "Kwark", "Zeta", "dairy").with_rating(Grade::BPlus),
    ])
    .unwrap()
}

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.get()).collect()
}

#[test]
fn every_product_is_found_by_id_and_barcode() {
    let catalog = Catalog::builtin();
    for product in catalog.products() {
        assert_eq!(catalog.find_by_id(product.id), Some(product));
        assert_eq!(catalog.find_by_barcode(&product.barcode), Some(product));
    }
}

#[test]
fn absent_keys_are_not_found() {
    let catalog = Catalog::builtin();
    assert!(catalog.find_by_id(ProductId::new(u32::MAX)).is_none());
    assert!(catalog.find_by_barcode("000000").is_none());
    assert!(catalog.find_by_barcode("").is_none());
}

#[test]
fn empty_search_is_the_whole_catalog_in_order() {
    let catalog = Catalog::builtin();
    let all: Vec<&Product> = catalog.products().iter().collect();
    assert_eq!(catalog.search(""), all);
}

#[test]
fn search_is_case_insensitive_and_stable() {
    let catalog = Catalog::builtin();
    for term in ["chocolade", "CHOCO", "Pinda", "spa", "koffie"] {
        let first = catalog.search(term);
        assert_eq!(first, catalog.search(term));
        assert_eq!(first, catalog.search(&term.to_uppercase()));

        let needle = term.to_lowercase();
        for product in &first {
            assert!(
                product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
            );
        }
        let expected = catalog
            .products()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.brand.to_lowercase().contains(&needle)
            })
            .count();
        assert_eq!(first.len(), expected);
    }
}

#[test]
fn recommendations_stay_in_category_and_above_threshold() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        for grade in Grade::ALL.iter().copied().map(Some).chain([None]) {
            for product in catalog.recommend(category, grade) {
                assert_eq!(product.category, category);
                assert!(product.score() >= RECOMMEND_THRESHOLD);
                assert!(matches!(
                    product.rating,
                    Some(Grade::A | Grade::AMinus | Grade::BPlus | Grade::B)
                ));
            }
        }
    }
}

#[test]
fn scenario_recommend_dairy() {
    let catalog = scenario();
    let mut recs = ids(&catalog.recommend("dairy", Some(Grade::D)));
    recs.sort_unstable();
    assert_eq!(recs, vec![1, 3]);
}

#[test]
fn scenario_search_by_brand() {
    let catalog = scenario();
    assert_eq!(ids(&catalog.search("acme")), vec![1, 2]);
    assert_eq!(ids(&catalog.search("zeta")), vec![3]);
}

#[test]
fn scenario_unknown_barcode() {
    assert!(scenario().find_by_barcode("000000").is_none());
}

#[test]
fn recommendation_order_is_uniform() {
    let catalog = Catalog::new(vec![
        Product::new(1, "1", "Een", "Acme", "thee").with_rating(Grade::A),
        Product::new(2, "2", "Twee", "Acme", "thee").with_rating(Grade::AMinus),
        Product::new(3, "3", "Drie", "Acme", "thee").with_rating(Grade::B),
    ])
    .unwrap();

    const ROUNDS: usize = 6000;
    let mut counts: HashMap<Vec<u32>, usize> = HashMap::new();
    for _ in 0..ROUNDS {
        *counts.entry(ids(&catalog.recommend("thee", None))).or_default() += 1;
    }

    // All six orderings show up, none dominates.
    assert_eq!(counts.len(), 6);
    for (order, count) in &counts {
        assert!(
            (750..=1250).contains(count),
            "ordering {:?} seen {} times out of {}",
            order,
            count,
            ROUNDS
        );
    }
}
