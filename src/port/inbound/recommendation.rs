//! Recommendation use cases exposed to inbound adapters.
//!
//! HTTP and CLI adapters depend on this trait only, keeping them thin over
//! the application core.

use crate::domain::{ModelStatus, Order, Recommendation, Rule};
use crate::error::Result;

/// Operations the serving core offers to its drivers.
pub trait RecommendationService: Send + Sync {
    /// Resolve `product` and rank what is bought with it.
    fn recommend(&self, product: &str) -> Result<Recommendation>;

    /// Persist a new order and retrain.
    ///
    /// A failed retrain is logged and does not fail the call; the order is
    /// committed once persisted.
    fn add_order(&self, order_id: &str, products: &[String]) -> Result<Order>;

    /// Readiness and dataset size.
    fn status(&self) -> ModelStatus;

    /// Strongest rules of the published model, in table order.
    fn top_rules(&self, limit: usize) -> Result<Vec<Rule>>;
}
