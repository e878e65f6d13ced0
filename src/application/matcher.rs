//! Fuzzy resolution of free-text product names against the catalog.
//!
//! Similarity is the Ratcliff/Obershelp ratio `2·M / T`, where `T` is the
//! combined length of both strings and `M` the number of characters covered
//! by recursively taking the longest common block and matching what lies to
//! its left and right. Comparison is exact: no case folding, no whitespace
//! normalization.

use std::collections::HashMap;

use crate::domain::{Catalog, DomainError, ProductName};

/// A query prepared for repeated comparison against candidates.
struct Query {
    chars: Vec<char>,
    positions: HashMap<char, Vec<usize>>,
}

impl Query {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in chars.iter().enumerate() {
            positions.entry(c).or_default().push(j);
        }
        Self { chars, positions }
    }

    fn ratio(&self, candidate: &str) -> f64 {
        let candidate: Vec<char> = candidate.chars().collect();
        let total = candidate.len() + self.chars.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matching(&candidate) as f64 / total as f64
    }

    fn matching(&self, a: &[char]) -> usize {
        let mut pending = vec![(0, a.len(), 0, self.chars.len())];
        let mut matched = 0;
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_block(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        matched
    }

    /// Longest block common to `a[alo..ahi]` and the query's `[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a`, then
    /// earliest in the query, wins.
    fn longest_block(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
        // Length of the common run ending at query position j, for the previous row.
        let mut run_ending: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.positions.get(c) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let len = j
                        .checked_sub(1)
                        .and_then(|prev| run_ending.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, len);
                    if len > best_len {
                        best_i = i + 1 - len;
                        best_j = j + 1 - len;
                        best_len = len;
                    }
                }
            }
            run_ending = next;
        }

        (best_i, best_j, best_len)
    }
}

/// Similarity of `candidate` to `query`, in `[0, 1]`.
#[must_use]
pub fn similarity(candidate: &str, query: &str) -> f64 {
    Query::new(query).ratio(candidate)
}

/// A resolved catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub product: &'a ProductName,
    pub score: f64,
}

/// Resolves free text to the single closest catalog entry.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    min_similarity: f64,
}

impl FuzzyMatcher {
    /// A matcher that always answers when the catalog is non-empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject best candidates scoring below `min_similarity`.
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    #[must_use]
    pub fn min_similarity(&self) -> f64 {
        self.min_similarity
    }

    /// Highest-scoring catalog entry for `query`.
    ///
    /// Equal scores resolve to the lexicographically greatest name. Fails with
    /// [`DomainError::NoMatch`] when the catalog is empty or the best score is
    /// under the similarity floor.
    pub fn best_match<'a>(&self, query: &str, catalog: &'a Catalog) -> Result<Match<'a>, DomainError> {
        let prepared = Query::new(query);
        let mut best: Option<Match<'a>> = None;

        for product in catalog.iter() {
            let score = prepared.ratio(product.as_str());
            let better = match &best {
                None => true,
                Some(current) => {
                    score > current.score || (score == current.score && product > current.product)
                }
            };
            if better {
                best = Some(Match { product, score });
            }
        }

        best.filter(|m| m.score >= self.min_similarity)
            .ok_or(DomainError::NoMatch)
    }
}
