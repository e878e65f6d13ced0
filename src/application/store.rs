//! Transaction store: the orders currently held and the catalog they define.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Catalog, DomainError, Order, OrderLine, ProductName, TransactionMatrix};

/// Orders in arrival order plus the product catalog.
///
/// The catalog only grows. Column order of the built matrix is the catalog's
/// first-seen order, so the matrix is deterministic for a given order sequence.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    orders: Vec<Order>,
    catalog: Catalog,
}

impl TransactionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild orders from persisted lines.
    ///
    /// Incomplete lines are dropped. Lines sharing an order id are grouped
    /// into one order, orders kept in first-seen order. The catalog follows
    /// line order.
    #[must_use]
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        let mut store = Self::new();
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut dropped = 0usize;

        for line in lines {
            if !line.is_complete() {
                dropped += 1;
                continue;
            }
            store.catalog.insert(&ProductName::new(line.product.as_str()));
            let slot = *positions.entry(line.order_id.as_str()).or_insert_with(|| {
                groups.push((line.order_id.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(line.product.as_str());
        }

        for (id, products) in groups {
            // Grouped lines are complete, so this cannot fail.
            if let Ok(order) = Order::try_new(id, products) {
                store.push(order);
            }
        }

        debug!(
            lines = lines.len(),
            dropped,
            orders = store.order_count(),
            products = store.catalog.len(),
            "Transaction store loaded"
        );
        store
    }

    /// Validate and append a new order.
    pub fn add_order<I>(&mut self, order_id: &str, products: I) -> Result<&Order, DomainError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let order = Order::try_new(order_id, products)?;
        Ok(self.push(order))
    }

    /// Append an already validated order.
    pub fn push(&mut self, order: Order) -> &Order {
        for product in order.products() {
            self.catalog.insert(product);
        }
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    /// Boolean order × product matrix of everything currently held.
    pub fn build_matrix(&self) -> Result<TransactionMatrix, DomainError> {
        let catalog = &self.catalog;
        let rows = self.orders.iter().map(|order| {
            order
                .products()
                .iter()
                .filter_map(|product| catalog.position(product.as_str()))
                .collect::<Vec<_>>()
        });
        TransactionMatrix::from_rows(catalog.as_slice().to_vec(), rows)
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
