//! Application services (use cases).
//!
//! These services drive the domain types: grouping orders, mining rules,
//! resolving product names and publishing trained models.

pub mod matcher;
pub mod mining;
pub mod query;
pub mod service;
pub mod state;
pub mod store;
pub mod training;

pub use matcher::{similarity, FuzzyMatcher, Match};
pub use mining::{Apriori, RuleGenerator};
pub use query::QueryEngine;
pub use service::{Recommender, RecommenderSettings};
pub use state::{ModelSnapshot, ModelState};
pub use store::TransactionStore;
pub use training::{Trainer, TrainingParams};
