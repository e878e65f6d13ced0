//! Level-wise Apriori search for frequent itemsets.
//!
//! # Algorithm
//!
//! 1. Count every product column; keep those with support >= `min_support`
//! 2. Extend each frequent k-itemset with one frequent product positioned after
//!    its last item
//! 3. Drop a candidate unless all of its k-subsets are frequent
//! 4. Count surviving candidates; keep those meeting `min_support`
//! 5. Repeat until a level comes back empty or covers every product
//!
//! Counting works on column bitsets: the rows containing a candidate are the
//! rows of its parent itemset intersected with the rows of the added product.

use std::collections::HashSet;

use crate::domain::{DomainError, FrequentItemsets, Itemset, TransactionMatrix};

/// Rows of the matrix as a packed bitset.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowSet(Vec<u64>);

impl RowSet {
    fn column(matrix: &TransactionMatrix, column: usize) -> Self {
        let mut words = vec![0u64; matrix.n_orders().div_ceil(64)];
        for (row, cells) in matrix.rows().enumerate() {
            if cells[column] {
                words[row / 64] |= 1u64 << (row % 64);
            }
        }
        Self(words)
    }

    fn intersect(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a & b).collect())
    }

    fn count(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }
}

/// Frequent itemset miner.
///
/// # Example
///
/// ```
/// use cartwise::application::mining::Apriori;
/// use cartwise::application::store::TransactionStore;
///
/// let mut store = TransactionStore::new();
/// store.add_order("1", ["A", "B"]).unwrap();
/// store.add_order("2", ["A", "B"]).unwrap();
/// store.add_order("3", ["A", "C"]).unwrap();
///
/// let itemsets = Apriori::new()
///     .with_min_support(0.3)
///     .mine(&store.build_matrix().unwrap())
///     .unwrap();
///
/// // {A, B} appears in 2 of 3 orders
/// let support = itemsets.support_of(&[0, 1]).unwrap();
/// assert!((support - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Apriori {
    min_support: f64,
}

impl Apriori {
    /// Create a miner with the default `min_support` of 0.01.
    #[must_use]
    pub fn new() -> Self {
        Self { min_support: 0.01 }
    }

    /// Set the minimum support threshold (0.0 to 1.0).
    ///
    /// Zero admits every itemset present in at least one order, which grows
    /// combinatorially with basket size.
    #[must_use]
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    #[must_use]
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Find every itemset whose support is at least `min_support`.
    ///
    /// Fails with [`DomainError::InvalidInput`] for a threshold outside
    /// `[0, 1]` or an empty matrix.
    pub fn mine(&self, matrix: &TransactionMatrix) -> Result<FrequentItemsets, DomainError> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(DomainError::invalid(format!(
                "min_support must be within [0, 1], got {}",
                self.min_support
            )));
        }
        if matrix.is_empty() {
            return Err(DomainError::invalid("cannot mine an empty dataset"));
        }

        let n_orders = matrix.n_orders();
        let columns: Vec<RowSet> = (0..matrix.n_products())
            .map(|column| RowSet::column(matrix, column))
            .collect();

        // Level 1: every product column.
        let mut level: Vec<(Itemset, RowSet)> = Vec::new();
        for (column, rows) in columns.iter().enumerate() {
            if let Some(itemset) = self.admit(vec![column], rows.count(), n_orders) {
                level.push((itemset, rows.clone()));
            }
        }
        let frequent_items: Vec<usize> = level.iter().map(|(itemset, _)| itemset.items[0]).collect();

        let mut found: Vec<Itemset> = Vec::new();
        let mut size = 1;
        while !level.is_empty() {
            let next = if size < matrix.n_products() {
                self.next_level(&level, &frequent_items, &columns, n_orders)
            } else {
                Vec::new()
            };
            found.extend(level.into_iter().map(|(itemset, _)| itemset));
            level = next;
            size += 1;
        }

        Ok(FrequentItemsets::new(
            matrix.products().to_vec(),
            n_orders,
            found,
        ))
    }

    /// Generate, prune and count the candidates of the next level.
    fn next_level(
        &self,
        level: &[(Itemset, RowSet)],
        frequent_items: &[usize],
        columns: &[RowSet],
        n_orders: usize,
    ) -> Vec<(Itemset, RowSet)> {
        let frequent: HashSet<&[usize]> =
            level.iter().map(|(itemset, _)| itemset.items.as_slice()).collect();

        let mut next = Vec::new();
        for (itemset, rows) in level {
            let last = itemset.items[itemset.items.len() - 1];
            for &item in frequent_items.iter().filter(|&&item| item > last) {
                let mut candidate = itemset.items.clone();
                candidate.push(item);
                if has_infrequent_subset(&candidate, &frequent) {
                    continue;
                }
                let candidate_rows = rows.intersect(&columns[item]);
                if let Some(admitted) = self.admit(candidate, candidate_rows.count(), n_orders) {
                    next.push((admitted, candidate_rows));
                }
            }
        }
        next
    }

    fn admit(&self, items: Vec<usize>, count: usize, n_orders: usize) -> Option<Itemset> {
        if count == 0 {
            return None;
        }
        let support = count as f64 / n_orders as f64;
        (support >= self.min_support).then_some(Itemset {
            items,
            count,
            support,
        })
    }
}

impl Default for Apriori {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether any subset of `candidate` one item smaller is missing from `frequent`.
///
/// The subset dropping the last item is the parent itemset and is skipped.
fn has_infrequent_subset(candidate: &[usize], frequent: &HashSet<&[usize]>) -> bool {
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    for skip in 0..candidate.len() - 1 {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item),
        );
        if !frequent.contains(subset.as_slice()) {
            return true;
        }
    }
    false
}
