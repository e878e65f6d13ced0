//! Frequent itemsets produced by a mining pass.

use std::collections::HashMap;

use super::id::ProductName;

/// A set of product columns together with how often they co-occur.
///
/// `items` is sorted ascending by column position and never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Itemset {
    pub items: Vec<usize>,
    /// Number of orders containing every item.
    pub count: usize,
    /// `count / total orders`, in `(0, 1]`.
    pub support: f64,
}

impl Itemset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of one mining pass.
///
/// Itemsets are held level by level (all 1-itemsets, then 2-itemsets, ...),
/// each level in lexicographic column order.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    products: Vec<ProductName>,
    n_orders: usize,
    itemsets: Vec<Itemset>,
    index: HashMap<Vec<usize>, usize>,
}

impl FrequentItemsets {
    /// Collect itemsets mined from a matrix with the given columns and row count.
    #[must_use]
    pub fn new(products: Vec<ProductName>, n_orders: usize, itemsets: Vec<Itemset>) -> Self {
        let index = itemsets
            .iter()
            .enumerate()
            .map(|(i, itemset)| (itemset.items.clone(), i))
            .collect();
        Self {
            products,
            n_orders,
            itemsets,
            index,
        }
    }

    /// Look up an itemset by its sorted column positions.
    #[must_use]
    pub fn get(&self, items: &[usize]) -> Option<&Itemset> {
        self.index.get(items).map(|&i| &self.itemsets[i])
    }

    #[must_use]
    pub fn support_of(&self, items: &[usize]) -> Option<f64> {
        self.get(items).map(|itemset| itemset.support)
    }

    /// Product names for a list of column positions.
    #[must_use]
    pub fn names(&self, items: &[usize]) -> Vec<ProductName> {
        items
            .iter()
            .filter_map(|&column| self.products.get(column).cloned())
            .collect()
    }

    #[must_use]
    pub fn products(&self) -> &[ProductName] {
        &self.products
    }

    #[must_use]
    pub fn n_orders(&self) -> usize {
        self.n_orders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Itemset> {
        self.itemsets.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Itemset] {
        &self.itemsets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Size of the largest itemset found.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.itemsets.iter().map(Itemset::len).max().unwrap_or(0)
    }
}
