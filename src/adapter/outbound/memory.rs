//! In-memory order log for tests and ephemeral runs.

use parking_lot::RwLock;

use crate::domain::OrderLine;
use crate::error::{Error, Result};
use crate::port::outbound::order_log::OrderLog;

/// Order log held in process memory.
#[derive(Debug, Default)]
pub struct MemoryOrderLog {
    lines: RwLock<Vec<OrderLine>>,
    reject_appends: bool,
}

impl MemoryOrderLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log pre-populated with `lines`.
    #[must_use]
    pub fn with_lines(lines: Vec<OrderLine>) -> Self {
        Self {
            lines: RwLock::new(lines),
            reject_appends: false,
        }
    }

    /// A log whose appends always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            lines: RwLock::default(),
            reject_appends: true,
        }
    }

    /// Snapshot of every stored line.
    #[must_use]
    pub fn lines(&self) -> Vec<OrderLine> {
        self.lines.read().clone()
    }
}

impl OrderLog for MemoryOrderLog {
    fn load(&self) -> Result<Vec<OrderLine>> {
        Ok(self.lines())
    }

    fn append(&self, lines: &[OrderLine]) -> Result<()> {
        if self.reject_appends {
            return Err(Error::Storage("order log rejected append".to_string()));
        }
        self.lines.write().extend_from_slice(lines);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
