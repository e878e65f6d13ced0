//! Persistence port for order history.

use crate::domain::OrderLine;
use crate::error::Result;

/// Durable storage for flat `(order, product)` lines.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `append` must not return until the lines are durable; an order is only
///   committed once this succeeds
/// - Writers are serialized by the caller, so implementations need no
///   internal write lock
pub trait OrderLog: Send + Sync {
    /// Read every persisted line, in file order.
    fn load(&self) -> Result<Vec<OrderLine>>;

    /// Append lines after the existing ones.
    fn append(&self, lines: &[OrderLine]) -> Result<()>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
