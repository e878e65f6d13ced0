//! Service configuration for the HTTP server, order data, training and queries.

use std::path::PathBuf;

use serde::Deserialize;

use crate::application::query::DEFAULT_MAX_RESULTS;
use crate::application::training::TrainingParams;

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: all interfaces).
    #[serde(default = "default_host")]
    pub host: String,
    /// Listening port. `CARTWISE_PORT` or `FLASK_RUN_PORT` override it.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    80
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where order history lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV file of `(order, product)` lines. `CARTWISE_ORDERS_PATH` overrides it.
    #[serde(default = "default_orders_path")]
    pub orders_path: PathBuf,
}

fn default_orders_path() -> PathBuf {
    PathBuf::from("Updated_sales.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            orders_path: default_orders_path(),
        }
    }
}

/// Mining thresholds used for every training pass.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_threshold")]
    pub min_support: f64,
    #[serde(default = "default_threshold")]
    pub min_confidence: f64,
}

const fn default_threshold() -> f64 {
    1e-5
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_support: default_threshold(),
            min_confidence: default_threshold(),
        }
    }
}

impl TrainingConfig {
    #[must_use]
    pub fn params(&self) -> TrainingParams {
        TrainingParams {
            min_support: self.min_support,
            min_confidence: self.min_confidence,
        }
    }
}

/// Query-time tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// Recommendations returned per query.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Best fuzzy matches scoring below this are rejected. 0 accepts anything.
    #[serde(default)]
    pub min_similarity: f64,
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            min_similarity: 0.0,
        }
    }
}
