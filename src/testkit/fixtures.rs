//! Order histories and recommenders built from them.

use std::sync::Arc;

use crate::adapter::outbound::memory::MemoryOrderLog;
use crate::application::service::{Recommender, RecommenderSettings};
use crate::application::store::TransactionStore;
use crate::application::training::TrainingParams;
use crate::domain::OrderLine;

/// Flatten `(order id, products)` pairs into persisted lines.
pub fn lines(orders: &[(&str, &[&str])]) -> Vec<OrderLine> {
    orders
        .iter()
        .flat_map(|(id, products)| products.iter().map(move |p| OrderLine::new(*id, *p)))
        .collect()
}

/// A store holding `orders`, ids assigned `1..`.
pub fn store(orders: &[&[&str]]) -> TransactionStore {
    let mut store = TransactionStore::new();
    for (i, products) in orders.iter().enumerate() {
        // Products are non-empty literals, so the order is always valid.
        let _ = store.add_order(&(i + 1).to_string(), products.iter().copied());
    }
    store
}

/// Three orders: `{A,B}`, `{A,B}`, `{A,C}`.
pub fn abc_orders() -> Vec<OrderLine> {
    lines(&[("1", &["A", "B"]), ("2", &["A", "B"]), ("3", &["A", "C"])])
}

/// A small electronics-store history.
pub fn electronics_orders() -> Vec<OrderLine> {
    lines(&[
        ("141234", &["iPhone 14", "Lightning Charging Cable"]),
        ("141235", &["iPhone 14", "Wired Headphones", "Lightning Charging Cable"]),
        ("141236", &["Google Phone", "USB-C Charging Cable"]),
        ("141237", &["Google Phone", "Wired Headphones"]),
        ("141238", &["iPhone 14", "Apple Airpods Headphones"]),
        ("141239", &["27in FHD Monitor", "USB-C Charging Cable"]),
        ("141240", &["AA Batteries (4-pack)"]),
    ])
}

/// Settings with the given thresholds and defaults elsewhere.
pub fn settings(min_support: f64, min_confidence: f64) -> RecommenderSettings {
    RecommenderSettings {
        training: TrainingParams {
            min_support,
            min_confidence,
        },
        ..RecommenderSettings::default()
    }
}

/// An untrained recommender over an in-memory log seeded with `lines`.
pub fn recommender(lines: Vec<OrderLine>) -> (Arc<Recommender>, Arc<MemoryOrderLog>) {
    recommender_with(lines, RecommenderSettings::default())
}

/// Like [`recommender`], with explicit settings.
pub fn recommender_with(
    lines: Vec<OrderLine>,
    settings: RecommenderSettings,
) -> (Arc<Recommender>, Arc<MemoryOrderLog>) {
    let log = Arc::new(MemoryOrderLog::with_lines(lines));
    let recommender = Recommender::with_store(
        log.clone(),
        TransactionStore::from_lines(&log.lines()),
        settings,
    );
    (Arc::new(recommender), log)
}
