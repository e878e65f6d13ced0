//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod order_log;
