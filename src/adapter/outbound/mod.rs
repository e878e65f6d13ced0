//! Outbound adapters (driven side).

pub mod csv;
pub mod memory;

pub use self::csv::CsvOrderLog;
pub use memory::MemoryOrderLog;
