//! Domain types for market-basket recommendations.
//!
//! Pure data and invariants; no I/O.

pub mod catalog;
pub mod error;
pub mod id;
pub mod itemset;
pub mod matrix;
pub mod order;
pub mod recommendation;
pub mod rule;

pub use catalog::Catalog;
pub use error::DomainError;
pub use id::{OrderId, ProductName};
pub use itemset::{FrequentItemsets, Itemset};
pub use matrix::TransactionMatrix;
pub use order::{Order, OrderLine};
pub use recommendation::{ModelStatus, Recommendation};
pub use rule::{Rule, RuleTable};
