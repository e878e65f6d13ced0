//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`recommendation`]: recommendation queries and order intake

pub mod recommendation;
