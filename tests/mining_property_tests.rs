use std::collections::BTreeSet;

use proptest::prelude::*;

use cartwise::application::matcher::FuzzyMatcher;
use cartwise::application::mining::{Apriori, RuleGenerator};
use cartwise::application::query::QueryEngine;
use cartwise::application::store::TransactionStore;
use cartwise::domain::ProductName;

const PRODUCTS: &[&str] = &["p0", "p1", "p2", "p3", "p4", "p5"];

fn orders_strategy() -> impl Strategy<Value = Vec<BTreeSet<usize>>> {
    prop::collection::vec(
        prop::collection::btree_set(0..PRODUCTS.len(), 1..=4),
        1..12,
    )
}

fn store_of(orders: &[BTreeSet<usize>]) -> TransactionStore {
    let mut store = TransactionStore::new();
    for (i, order) in orders.iter().enumerate() {
        store
            .add_order(&i.to_string(), order.iter().map(|&p| PRODUCTS[p]))
            .unwrap();
    }
    store
}

/// Count orders containing every named product.
fn count_containing(orders: &[BTreeSet<usize>], names: &[&str]) -> usize {
    orders
        .iter()
        .filter(|order| {
            names
                .iter()
                .all(|name| order.iter().any(|&p| PRODUCTS[p] == *name))
        })
        .count()
}

proptest! {
    #[test]
    fn mined_itemsets_are_sound_and_complete(
        orders in orders_strategy(),
        min_support in 0.05f64..0.6,
    ) {
        let store = store_of(&orders);
        let matrix = store.build_matrix().unwrap();
        let itemsets = Apriori::new().with_min_support(min_support).mine(&matrix).unwrap();
        let columns = itemsets.products().to_vec();
        let n = orders.len();

        // soundness: reported counts are exact and above threshold
        for itemset in itemsets.iter() {
            let names: Vec<&str> = itemset.items.iter().map(|&c| columns[c].as_str()).collect();
            prop_assert_eq!(itemset.count, count_containing(&orders, &names));
            prop_assert!(itemset.support > 0.0 && itemset.support <= 1.0);
            prop_assert!(itemset.support >= min_support);
        }

        // completeness: every frequent subset of the catalog was found
        let width = columns.len();
        for mask in 1u32..(1 << width) {
            let items: Vec<usize> = (0..width).filter(|c| mask & (1 << c) != 0).collect();
            let names: Vec<&str> = items.iter().map(|&c| columns[c].as_str()).collect();
            let count = count_containing(&orders, &names);
            let frequent = count > 0 && count as f64 / n as f64 >= min_support;
            prop_assert_eq!(frequent, itemsets.get(&items).is_some(), "itemset {:?}", names);
        }
    }

    #[test]
    fn rule_confidence_matches_definition(
        orders in orders_strategy(),
        min_confidence in 0.0f64..1.0,
    ) {
        let store = store_of(&orders);
        let matrix = store.build_matrix().unwrap();
        let itemsets = Apriori::new().with_min_support(1e-5).mine(&matrix).unwrap();
        let rules = RuleGenerator::new()
            .with_min_confidence(min_confidence)
            .generate(&itemsets)
            .unwrap();

        for rule in rules.iter() {
            prop_assert!(rule.confidence > 0.0 && rule.confidence <= 1.0);
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!((rule.confidence - rule.support / rule.antecedent_support).abs() < 1e-9);
            prop_assert!((rule.lift - rule.confidence / rule.consequent_support).abs() < 1e-9);
            for product in &rule.antecedent {
                prop_assert!(!rule.consequent.contains(product));
            }
        }

        let lifts: Vec<f64> = rules.iter().map(|r| r.lift).collect();
        prop_assert!(lifts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn recommendations_are_short_distinct_and_exclude_the_query(
        orders in orders_strategy(),
        query in "[a-z0-9 ]{0,6}",
    ) {
        let store = store_of(&orders);
        let matrix = store.build_matrix().unwrap();
        let itemsets = Apriori::new().with_min_support(1e-5).mine(&matrix).unwrap();
        let rules = RuleGenerator::new().with_min_confidence(1e-5).generate(&itemsets).unwrap();

        let matched = FuzzyMatcher::new().best_match(&query, store.catalog()).unwrap();
        let product: ProductName = matched.product.clone();
        let recs = QueryEngine::new().recommend(&rules, &product);

        prop_assert!(recs.len() <= 5);
        prop_assert!(!recs.contains(&product));
        let distinct: BTreeSet<&ProductName> = recs.iter().collect();
        prop_assert_eq!(distinct.len(), recs.len());

        // determinism
        let again = QueryEngine::new().recommend(&rules, &product);
        prop_assert_eq!(recs, again);
    }

    #[test]
    fn catalog_never_duplicates(
        orders in orders_strategy(),
        repeat in 0usize..4,
    ) {
        let mut store = store_of(&orders);
        let before = store.catalog().len();
        for i in 0..repeat {
            let order = &orders[i % orders.len()];
            store
                .add_order("dup", order.iter().map(|&p| PRODUCTS[p]))
                .unwrap();
        }
        prop_assert_eq!(store.order_count(), orders.len() + repeat);
        prop_assert_eq!(store.catalog().len(), before);
    }
}
