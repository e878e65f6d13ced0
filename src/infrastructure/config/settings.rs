//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the listening port and the order
//! file location can be overridden from the environment.
//!
//! # Example
//!
//! ```no_run
//! use cartwise::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::service::{DataConfig, RecommendConfig, ServerConfig, TrainingConfig};
use crate::application::service::RecommenderSettings;
use crate::error::{ConfigError, Result};

/// Port override. Takes precedence over [`LEGACY_PORT_ENV`].
pub const PORT_ENV: &str = "CARTWISE_PORT";
/// Port variable honoured for existing deployments.
pub const LEGACY_PORT_ENV: &str = "FLASK_RUN_PORT";
/// Order file override.
pub const ORDERS_PATH_ENV: &str = "CARTWISE_ORDERS_PATH";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,

    /// Order history location.
    #[serde(default)]
    pub data: DataConfig,

    /// Support and confidence thresholds.
    #[serde(default)]
    pub training: TrainingConfig,

    /// Result cap and fuzzy-match floor.
    #[serde(default)]
    pub recommend: RecommendConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an override cannot
    /// be parsed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`], reading overrides through `env`.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in [LEGACY_PORT_ENV, PORT_ENV] {
            if let Some(raw) = env(key).filter(|v| !v.trim().is_empty()) {
                self.server.port = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: key,
                    reason: format!("'{raw}' is not a valid port"),
                })?;
            }
        }

        if let Some(path) = env(ORDERS_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.data.orders_path = PathBuf::from(path);
        }

        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.data.orders_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "orders_path",
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }

        let unit_ranges = [
            ("min_support", self.training.min_support),
            ("min_confidence", self.training.min_confidence),
            ("min_similarity", self.recommend.min_similarity),
        ];
        for (field, value) in unit_ranges {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be between 0 and 1".to_string(),
                }
                .into());
            }
        }

        if self.recommend.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_results",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Address the HTTP server binds to.
    #[allow(clippy::result_large_err)]
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse::<SocketAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue {
                    field: "host",
                    reason: format!("'{}' is not an IP address", self.server.host),
                }
                .into()
            })
    }

    /// Settings for the recommendation engine.
    #[must_use]
    pub fn recommender_settings(&self) -> RecommenderSettings {
        RecommenderSettings {
            training: self.training.params(),
            max_results: self.recommend.max_results,
            min_similarity: self.recommend.min_similarity,
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
