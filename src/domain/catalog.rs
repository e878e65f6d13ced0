//! The product catalog: every distinct product name ever seen.

use std::collections::HashMap;

use super::id::ProductName;

/// Append-only set of product names with stable, first-seen positions.
///
/// A product's position doubles as its column in the transaction matrix.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductName>,
    positions: HashMap<ProductName, usize>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, returning its position and whether it was new.
    pub fn insert(&mut self, product: &ProductName) -> (usize, bool) {
        if let Some(&position) = self.positions.get(product) {
            return (position, false);
        }
        let position = self.products.len();
        self.products.push(product.clone());
        self.positions.insert(product.clone(), position);
        (position, true)
    }

    /// Position of a product, if known.
    #[must_use]
    pub fn position(&self, product: &str) -> Option<usize> {
        self.positions.get(product).copied()
    }

    #[must_use]
    pub fn contains(&self, product: &str) -> bool {
        self.positions.contains_key(product)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ProductName> {
        self.products.get(position)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ProductName] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductName> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_seen_positions() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert(&"B".into()), (0, true));
        assert_eq!(catalog.insert(&"A".into()), (1, true));
        assert_eq!(catalog.insert(&"B".into()), (0, false));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("A"), Some(1));
        assert_eq!(catalog.get(0).map(ProductName::as_str), Some("B"));
    }

    #[test]
    fn lookups_are_exact() {
        let mut catalog = Catalog::new();
        catalog.insert(&"Leather Case".into());
        assert!(catalog.contains("Leather Case"));
        assert!(!catalog.contains("leather case"));
        assert!(!catalog.contains("Leather Case "));
    }
}
