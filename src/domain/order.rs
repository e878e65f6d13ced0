//! Orders and the flat order lines they are persisted as.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{OrderId, ProductName};

/// A bag of products purchased together.
///
/// Products are deduplicated on construction, keeping first-seen order.
/// An order always holds at least one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    products: Vec<ProductName>,
}

impl Order {
    /// Validate and build an order.
    ///
    /// Fails with [`DomainError::InvalidInput`] when the id is blank, when no
    /// products are given, or when a product name is empty.
    pub fn try_new<I>(id: impl Into<String>, products: I) -> Result<Self, DomainError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid("order id cannot be empty"));
        }

        let mut unique: Vec<ProductName> = Vec::new();
        for product in products {
            let product = product.into();
            if product.is_empty() {
                return Err(DomainError::invalid("product names cannot be empty"));
            }
            let product = ProductName::new(product);
            if !unique.contains(&product) {
                unique.push(product);
            }
        }

        if unique.is_empty() {
            return Err(DomainError::invalid("order must contain at least one product"));
        }

        Ok(Self {
            id: OrderId::new(id),
            products: unique,
        })
    }

    /// The order identifier.
    #[must_use]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Distinct products in first-seen order.
    #[must_use]
    pub fn products(&self) -> &[ProductName] {
        &self.products
    }

    /// Whether the order contains the given product.
    #[must_use]
    pub fn contains(&self, product: &str) -> bool {
        self.products.iter().any(|p| p.as_str() == product)
    }

    /// One persisted line per product, passthrough fields left blank.
    #[must_use]
    pub fn to_lines(&self) -> Vec<OrderLine> {
        self.products
            .iter()
            .map(|product| OrderLine::new(self.id.as_str(), product.as_str()))
            .collect()
    }
}

/// One persisted `(order, product)` record.
///
/// Only `order_id` and `product` are interpreted; the remaining columns are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "Order ID", default)]
    pub order_id: String,
    #[serde(rename = "Product", default)]
    pub product: String,
    #[serde(rename = "Quantity Ordered", alias = "Quantity", default)]
    pub quantity: String,
    #[serde(rename = "Price Each", alias = "Price", default)]
    pub price: String,
    #[serde(rename = "Order Date", default)]
    pub order_date: String,
    #[serde(rename = "Purchase Address", default)]
    pub purchase_address: String,
}

impl OrderLine {
    /// Create a line with only the interpreted columns filled in.
    pub fn new(order_id: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            product: product.into(),
            ..Default::default()
        }
    }

    /// Value for a CSV column, by header name or alias.
    #[must_use]
    pub fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "Order ID" => &self.order_id,
            "Product" => &self.product,
            "Quantity Ordered" | "Quantity" => &self.quantity,
            "Price Each" | "Price" => &self.price,
            "Order Date" => &self.order_date,
            "Purchase Address" => &self.purchase_address,
            _ => return None,
        };
        Some(value)
    }

    /// Lines missing either interpreted column are not admitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.order_id.trim().is_empty() && !self.product.is_empty()
    }
}
