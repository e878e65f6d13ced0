//! Retraining: rebuild matrix, mine, generate rules, publish.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use super::mining::{Apriori, RuleGenerator};
use super::state::{ModelSnapshot, ModelState};
use super::store::TransactionStore;
use crate::domain::DomainError;

/// Support and confidence thresholds for a training pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingParams {
    pub min_support: f64,
    pub min_confidence: f64,
}

impl Default for TrainingParams {
    /// Very low thresholds so a small dataset still yields rules.
    fn default() -> Self {
        Self {
            min_support: 1e-5,
            min_confidence: 1e-5,
        }
    }
}

/// Runs training passes and publishes their results.
#[derive(Debug, Clone)]
pub struct Trainer {
    miner: Apriori,
    generator: RuleGenerator,
}

impl Trainer {
    #[must_use]
    pub fn new(params: TrainingParams) -> Self {
        Self {
            miner: Apriori::new().with_min_support(params.min_support),
            generator: RuleGenerator::new().with_min_confidence(params.min_confidence),
        }
    }

    /// Build a new model from everything the store holds.
    pub fn train(&self, store: &TransactionStore) -> Result<ModelSnapshot, DomainError> {
        let started = Instant::now();

        let matrix = store.build_matrix()?;
        let itemsets = self.miner.mine(&matrix)?;
        let rules = self.generator.generate(&itemsets)?;

        info!(
            orders = matrix.n_orders(),
            products = matrix.n_products(),
            itemsets = itemsets.len(),
            rules = rules.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Training pass complete"
        );

        Ok(ModelSnapshot {
            rules,
            catalog: Arc::new(store.catalog().clone()),
            orders: matrix.n_orders(),
            itemsets: itemsets.len(),
            trained_at: Utc::now(),
        })
    }

    /// Train and publish. On failure the previous model stays in place.
    ///
    /// Returns whether a new model was published.
    pub fn refresh(&self, store: &TransactionStore, state: &ModelState) -> bool {
        match self.train(store) {
            Ok(snapshot) => {
                state.publish(snapshot);
                true
            }
            Err(e) => {
                warn!(
                    error = %e,
                    orders = store.order_count(),
                    ready = state.is_ready(),
                    "Training failed; keeping previous model"
                );
                false
            }
        }
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainingParams::default())
    }
}
