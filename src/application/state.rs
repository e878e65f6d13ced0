//! Published model state shared between readers and the training path.
//!
//! A model is built completely off to the side and then published by
//! swapping one `Arc`. The snapshot carries the catalog it was trained on,
//! so a reader that clones the `Arc` matches and ranks against the same
//! order history for as long as it holds it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Catalog, RuleTable};

/// One immutable training result.
#[derive(Debug, Clone)]
pub struct ModelSnapshot {
    pub rules: RuleTable,
    /// Products known when the rules were mined.
    pub catalog: Arc<Catalog>,
    /// Orders in the matrix the rules were mined from.
    pub orders: usize,
    pub itemsets: usize,
    pub trained_at: DateTime<Utc>,
}

impl ModelSnapshot {
    /// Wrap a rule table that did not come from a training pass.
    #[must_use]
    pub fn from_rules(rules: RuleTable, catalog: Catalog) -> Self {
        Self {
            rules,
            catalog: Arc::new(catalog),
            orders: 0,
            itemsets: 0,
            trained_at: Utc::now(),
        }
    }
}

/// Shared state accessible by request handlers and the trainer.
#[derive(Debug, Default)]
pub struct ModelState {
    /// `None` until the first successful training pass.
    model: RwLock<Option<Arc<ModelSnapshot>>>,
}

impl ModelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current model, if one has been published.
    pub fn model(&self) -> Option<Arc<ModelSnapshot>> {
        self.model.read().clone()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.model.read().is_some()
    }

    /// Replace the published model.
    pub fn publish(&self, snapshot: ModelSnapshot) {
        let snapshot = Arc::new(snapshot);
        *self.model.write() = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductName;

    #[test]
    fn starts_not_ready() {
        let state = ModelState::new();
        assert!(!state.is_ready());
        assert!(state.model().is_none());
    }

    #[test]
    fn publish_makes_model_visible() {
        let state = ModelState::new();
        state.publish(ModelSnapshot::from_rules(RuleTable::empty(), Catalog::new()));
        assert!(state.is_ready());
        assert!(state.model().unwrap().rules.is_empty());
    }

    #[test]
    fn held_snapshot_survives_republish() {
        let state = ModelState::new();
        let mut first = ModelSnapshot::from_rules(RuleTable::empty(), Catalog::new());
        first.orders = 1;
        state.publish(first);

        let held = state.model().unwrap();

        let mut second = ModelSnapshot::from_rules(RuleTable::empty(), Catalog::new());
        second.orders = 2;
        state.publish(second);

        assert_eq!(held.orders, 1);
        assert_eq!(state.model().unwrap().orders, 2);
    }

    #[test]
    fn catalog_travels_with_its_rules() {
        let state = ModelState::new();
        let mut catalog = Catalog::new();
        catalog.insert(&ProductName::new("Magic Mouse"));
        state.publish(ModelSnapshot::from_rules(RuleTable::empty(), catalog));
        let held = state.model().unwrap();

        let mut wider = Catalog::new();
        wider.insert(&ProductName::new("Magic Mouse"));
        wider.insert(&ProductName::new("Magic Keyboard"));
        state.publish(ModelSnapshot::from_rules(RuleTable::empty(), wider));

        assert_eq!(held.catalog.len(), 1);
        assert!(state.model().unwrap().catalog.contains("Magic Keyboard"));
    }
}
