//! Boolean order × product transaction matrix.

use super::error::DomainError;
use super::id::ProductName;

/// Dense boolean matrix, one row per order and one column per product.
///
/// Columns follow catalog order. Every row has at least one present cell;
/// empty rows are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMatrix {
    products: Vec<ProductName>,
    cells: Vec<bool>,
    rows: usize,
}

impl TransactionMatrix {
    /// Build a matrix from rows given as lists of column positions.
    ///
    /// Fails with [`DomainError::InternalConsistency`] if a position falls
    /// outside the product columns.
    pub fn from_rows<R, I>(products: Vec<ProductName>, rows: R) -> Result<Self, DomainError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = usize>,
    {
        let width = products.len();
        let mut cells = Vec::new();
        let mut count = 0;

        for row in rows {
            let mut line = vec![false; width];
            let mut any = false;
            for column in row {
                let cell = line.get_mut(column).ok_or_else(|| {
                    DomainError::inconsistent(format!(
                        "column {column} out of range for {width} products"
                    ))
                })?;
                *cell = true;
                any = true;
            }
            if any {
                cells.extend(line);
                count += 1;
            }
        }

        Ok(Self {
            products,
            cells,
            rows: count,
        })
    }

    /// Column headers.
    #[must_use]
    pub fn products(&self) -> &[ProductName] {
        &self.products
    }

    #[must_use]
    pub fn n_orders(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn n_products(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether `product` is present in `order`. Out-of-range cells are absent.
    #[must_use]
    pub fn is_present(&self, order: usize, product: usize) -> bool {
        if order >= self.rows || product >= self.products.len() {
            return false;
        }
        self.cells[order * self.products.len() + product]
    }

    /// One row as a boolean slice.
    #[must_use]
    pub fn row(&self, order: usize) -> Option<&[bool]> {
        let width = self.products.len();
        if order >= self.rows {
            return None;
        }
        Some(&self.cells[order * width..(order + 1) * width])
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on zero; a matrix without columns has no rows.
        self.cells.chunks_exact(self.products.len().max(1))
    }
}
