//! Query results and model status reported to callers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::ProductName;

/// Answer to a recommendation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The caller's text, trimmed.
    pub input_product: String,
    /// Catalog entry the text resolved to.
    pub matched_product: ProductName,
    /// Distinct co-purchased products, strongest first. Never contains
    /// `matched_product`.
    pub recommendations: Vec<ProductName>,
}

/// Readiness snapshot of the serving model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStatus {
    pub ready: bool,
    pub orders: usize,
    pub products: usize,
    pub rules: usize,
    pub trained_at: Option<DateTime<Utc>>,
}
