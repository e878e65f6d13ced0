//! Domain errors for the recommendation core.
//!
//! Every failure the core can report to a caller is one of these variants.
//! Inbound adapters translate them into user-facing responses; none of them
//! is fatal to the serving process.
//!
//! # Examples
//!
//! ```
//! use cartwise::domain::error::DomainError;
//! use cartwise::domain::Order;
//!
//! let result = Order::try_new("", vec!["iPhone 14".to_string()]);
//! assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
//! ```

use thiserror::Error;

/// Errors raised by the transaction store, miner, rule generator and query engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed or empty caller input.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Queried before the first successful training pass.
    #[error("model is still loading, try again shortly")]
    ModelNotReady,

    /// No catalog entry could be resolved for the query.
    #[error("no matching product found")]
    NoMatch,

    /// An impossible state was reached while training.
    #[error("internal consistency violation: {reason}")]
    InternalConsistency {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InternalConsistency {
            reason: reason.into(),
        }
    }
}
