//! The serving core: one owned context over store, catalog and rule table.
//!
//! Writes (append order, persist, retrain, publish) run under a single mutex
//! so matrix rebuilds never interleave. Reads never take that mutex; they
//! match and rank against one published snapshot, catalog included.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::matcher::FuzzyMatcher;
use super::query::{QueryEngine, DEFAULT_MAX_RESULTS};
use super::state::{ModelSnapshot, ModelState};
use super::store::TransactionStore;
use super::training::{Trainer, TrainingParams};
use crate::domain::{DomainError, ModelStatus, Order, Recommendation, Rule, RuleTable};
use crate::error::Result;
use crate::port::inbound::recommendation::RecommendationService;
use crate::port::outbound::order_log::OrderLog;

/// Tunables for a [`Recommender`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderSettings {
    pub training: TrainingParams,
    pub max_results: usize,
    /// Similarity floor for fuzzy matching; 0 always matches.
    pub min_similarity: f64,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            training: TrainingParams::default(),
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity: 0.0,
        }
    }
}

/// Recommendation engine bound to an order log.
pub struct Recommender {
    log: Arc<dyn OrderLog>,
    store: Mutex<TransactionStore>,
    orders: AtomicUsize,
    products: AtomicUsize,
    state: ModelState,
    trainer: Trainer,
    matcher: FuzzyMatcher,
    query: QueryEngine,
}

impl Recommender {
    /// Load persisted orders and build an untrained recommender.
    pub fn open(log: Arc<dyn OrderLog>, settings: RecommenderSettings) -> Result<Self> {
        let lines = log.load()?;
        let store = TransactionStore::from_lines(&lines);
        info!(
            source = %log.describe(),
            orders = store.order_count(),
            products = store.catalog().len(),
            "Order history loaded"
        );
        Ok(Self::with_store(log, store, settings))
    }

    /// Build an untrained recommender over an existing store.
    #[must_use]
    pub fn with_store(
        log: Arc<dyn OrderLog>,
        store: TransactionStore,
        settings: RecommenderSettings,
    ) -> Self {
        Self {
            log,
            orders: AtomicUsize::new(store.order_count()),
            products: AtomicUsize::new(store.catalog().len()),
            store: Mutex::new(store),
            state: ModelState::new(),
            trainer: Trainer::new(settings.training),
            matcher: FuzzyMatcher::new().with_min_similarity(settings.min_similarity),
            query: QueryEngine::new().with_max_results(settings.max_results),
        }
    }

    /// Retrain from the current orders and publish the result.
    ///
    /// Failures are logged and leave the published model untouched.
    pub fn retrain(&self) -> bool {
        let store = self.store.lock();
        self.trainer.refresh(&store, &self.state)
    }

    /// Publish a rule table built elsewhere, paired with the current catalog.
    pub fn swap_table(&self, rules: RuleTable) {
        let store = self.store.lock();
        self.state
            .publish(ModelSnapshot::from_rules(rules, store.catalog().clone()));
    }

    /// Published model.
    #[must_use]
    pub fn state(&self) -> &ModelState {
        &self.state
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.load(Ordering::SeqCst)
    }
}

impl RecommendationService for Recommender {
    fn recommend(&self, product: &str) -> Result<Recommendation> {
        let model = self.state.model().ok_or(DomainError::ModelNotReady)?;

        let input = product.trim();
        if input.is_empty() {
            return Err(DomainError::invalid("Please provide a product name").into());
        }

        let matched = self.matcher.best_match(input, &model.catalog)?;
        let recommendations = self.query.recommend(&model.rules, matched.product);

        debug!(
            input,
            matched = %matched.product,
            score = matched.score,
            count = recommendations.len(),
            "Recommendation served"
        );

        Ok(Recommendation {
            input_product: input.to_string(),
            matched_product: matched.product.clone(),
            recommendations,
        })
    }

    fn add_order(&self, order_id: &str, products: &[String]) -> Result<Order> {
        let order = Order::try_new(order_id, products.iter().cloned())?;

        let mut store = self.store.lock();
        self.log.append(&order.to_lines())?;
        let order = store.push(order).clone();
        self.orders.store(store.order_count(), Ordering::SeqCst);
        self.products.store(store.catalog().len(), Ordering::SeqCst);

        info!(
            order_id = %order.id(),
            products = order.products().len(),
            "Order committed"
        );

        self.trainer.refresh(&store, &self.state);
        Ok(order)
    }

    fn status(&self) -> ModelStatus {
        let model = self.state.model();
        ModelStatus {
            ready: model.is_some(),
            orders: self.order_count(),
            products: self.product_count(),
            rules: model.as_ref().map_or(0, |m| m.rules.len()),
            trained_at: model.as_ref().map(|m| m.trained_at),
        }
    }

    fn top_rules(&self, limit: usize) -> Result<Vec<Rule>> {
        let model = self.state.model().ok_or(DomainError::ModelNotReady)?;
        Ok(model.rules.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryOrderLog;
    use crate::domain::OrderLine;
    use crate::error::Error;

    fn recommender(lines: Vec<OrderLine>) -> (Recommender, Arc<MemoryOrderLog>) {
        let log = Arc::new(MemoryOrderLog::with_lines(lines));
        let recommender = Recommender::open(log.clone(), RecommenderSettings::default()).unwrap();
        (recommender, log)
    }

    fn lines(orders: &[(&str, &[&str])]) -> Vec<OrderLine> {
        orders
            .iter()
            .flat_map(|(id, products)| products.iter().map(move |p| OrderLine::new(*id, *p)))
            .collect()
    }

    #[test]
    fn recommend_before_training_is_not_ready() {
        let (rec, _) = recommender(lines(&[("1", &["A", "B"])]));
        let err = rec.recommend("A").unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::ModelNotReady)));
    }

    #[test]
    fn recommend_rejects_blank_input() {
        let (rec, _) = recommender(lines(&[("1", &["A", "B"])]));
        assert!(rec.retrain());
        let err = rec.recommend("   ").unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidInput { .. })));
    }

    #[test]
    fn recommend_trims_input() {
        let (rec, _) = recommender(lines(&[("1", &["A", "B"])]));
        assert!(rec.retrain());
        let result = rec.recommend("  A ").unwrap();
        assert_eq!(result.input_product, "A");
        assert_eq!(result.matched_product.as_str(), "A");
        assert_eq!(result.recommendations, vec!["B".into()]);
    }

    #[test]
    fn add_order_persists_and_retrains() {
        let (rec, log) = recommender(Vec::new());
        assert!(!rec.state().is_ready());

        rec.add_order("9", &["Magic Mouse".into(), "Magic Keyboard with Touch ID".into()])
            .unwrap();

        assert_eq!(log.lines().len(), 2);
        assert_eq!(rec.order_count(), 1);
        let status = rec.status();
        assert!(status.ready);
        assert_eq!(status.products, 2);
        assert_eq!(status.rules, 2);
    }

    #[test]
    fn add_order_rejects_invalid_input_without_persisting() {
        let (rec, log) = recommender(Vec::new());
        assert!(rec.add_order("", &["A".into()]).is_err());
        assert!(rec.add_order("1", &[]).is_err());
        assert!(log.lines().is_empty());
        assert_eq!(rec.order_count(), 0);
    }

    #[test]
    fn failed_persist_leaves_store_unchanged() {
        let log = Arc::new(MemoryOrderLog::failing());
        let rec = Recommender::open(log, RecommenderSettings::default()).unwrap();

        assert!(rec.add_order("1", &["A".into()]).is_err());
        assert_eq!(rec.order_count(), 0);
        assert_eq!(rec.product_count(), 0);
    }

    #[test]
    fn top_rules_follow_table_order() {
        let (rec, _) = recommender(lines(&[("1", &["A", "B"]), ("2", &["A", "C"]), ("3", &["A", "B"])]));
        assert!(rec.retrain());
        let rules = rec.top_rules(2).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].lift >= rules[1].lift);
    }
}
