//! Property-Based Tests for the Product Service
//!
//! Uses proptest to check the collection invariants over generated catalogues.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::cache::TtlCacheManager;
use crate::domain::{Product, ProductSearchFilter};
use crate::error::ProductError;
use crate::service::{ProductService, ProductServices};

// == Strategies ==
fn feedback_strategy() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(("[a-z]{1,6}", -10i32..=10), 0..6)
}

fn product_strategy() -> impl Strategy<Value = Product> {
    ("[A-C]{1,2}", "[a-z]{1,4}", feedback_strategy()).prop_map(|(brand, name, feedback)| {
        feedback
            .into_iter()
            .fold(Product::new("", name, brand), |p, (tag, score)| {
                p.with_feedback(tag, score)
            })
    })
}

/// Products with unique ids `p0`, `p1`, ...
fn catalogue_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 1..20).prop_map(|products| {
        products
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                p.id = format!("p{}", i);
                p
            })
            .collect()
    })
}

fn seeded(products: Vec<Product>) -> ProductServices {
    let service = ProductServices::new(Arc::new(TtlCacheManager::new(Duration::from_secs(60))));
    service.add_products(Some(products)).unwrap();
    service
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rating_is_mean_of_feedback(product in product_strategy()) {
        let scores: Vec<i32> = product.feedback.values().copied().collect();
        let expected = if scores.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from(scores.iter().map(|&s| i64::from(s)).sum::<i64>())
                / Decimal::from(scores.len())
        };
        prop_assert_eq!(product.rating(), expected);
    }

    #[test]
    fn prop_empty_filter_equals_list_all(products in catalogue_strategy()) {
        let service = seeded(products);
        prop_assert_eq!(
            service.search(&ProductSearchFilter::new()).unwrap(),
            service.list_all().unwrap()
        );
    }

    #[test]
    fn prop_rating_range_selects_exact_subset(
        products in catalogue_strategy(),
        a in -10i64..=10,
        b in -10i64..=10,
    ) {
        let (min, max) = (Decimal::from(a.min(b)), Decimal::from(a.max(b)));
        let service = seeded(products.clone());

        let found = service
            .search(&ProductSearchFilter::new().with_rating_min(min).with_rating_max(max))
            .unwrap();

        let expected: Vec<Product> = products
            .into_iter()
            .filter(|p| min <= p.rating() && p.rating() <= max)
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_delete_shrinks_by_one(products in catalogue_strategy(), pick in any::<prop::sample::Index>()) {
        let victim = products[pick.index(products.len())].id.clone();
        let before = products.len();
        let service = seeded(products);

        prop_assert_eq!(service.delete_product(&victim).unwrap(), victim.clone());

        prop_assert_eq!(service.list_all().unwrap().len(), before - 1);
        prop_assert!(service
            .search(&ProductSearchFilter::new().with_id(victim))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn prop_feedback_lands_last(
        products in catalogue_strategy(),
        pick in any::<prop::sample::Index>(),
        tag in "[a-z]{1,6}",
        score in -10i32..=10,
    ) {
        let id = products[pick.index(products.len())].id.clone();
        let service = seeded(products);

        let product = service.add_feedback(&id, &tag, score).unwrap();

        prop_assert_eq!(product.feedback.last(), Some((&tag, &score)));
    }

    #[test]
    fn prop_update_unknown_id_is_not_found(products in catalogue_strategy()) {
        let service = seeded(products);
        let result = service.update_product("missing", Some(Product::new("missing", "n", "b")));
        prop_assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
