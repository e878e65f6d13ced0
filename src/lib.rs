//! Cartwise - frequently-bought-together recommendations.
//!
//! Mines association rules from order history with Apriori and answers
//! "what else do people buy with this?" for free-text product names.
//!
//! # Architecture
//!
//! - [`domain`] - Orders, catalog, transaction matrix, itemsets and rules
//! - [`application`] - Transaction store, Apriori miner, rule generator,
//!   fuzzy matcher, query engine and the retraining coordinator
//! - [`port`] - Traits at the edges: order persistence and the
//!   recommendation service
//! - [`adapter`] - CSV and in-memory order logs, HTTP routes and the CLI
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cartwise::adapter::outbound::memory::MemoryOrderLog;
//! use cartwise::application::{Recommender, RecommenderSettings};
//! use cartwise::port::inbound::recommendation::RecommendationService;
//!
//! let log = Arc::new(MemoryOrderLog::new());
//! let recommender = Recommender::open(log, RecommenderSettings::default()).unwrap();
//!
//! recommender
//!     .add_order("1", &["iPhone 14".into(), "Lightning Charging Cable".into()])
//!     .unwrap();
//!
//! let result = recommender.recommend("iphoen 14").unwrap();
//! assert_eq!(result.matched_product.as_str(), "iPhone 14");
//! assert_eq!(result.recommendations[0].as_str(), "Lightning Charging Cable");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
