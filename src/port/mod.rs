//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP / CLI ──▶ RecommendationService ──▶ application core ──▶ OrderLog ──▶ CSV / memory
//! ```

pub mod inbound;
pub mod outbound;
