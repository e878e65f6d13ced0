//! Association rule generation from frequent itemsets.

use crate::domain::{DomainError, FrequentItemsets, Itemset, Rule, RuleTable};

/// Expands frequent itemsets into directional rules filtered by confidence.
///
/// For each itemset `I` with at least two items, every non-empty proper
/// subset `A` yields the rule `A → I \ A`. Antecedents are enumerated from
/// size `|I| - 1` down to 1, each size in lexicographic order; that order is
/// the tie-break when the table is sorted by lift.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    min_confidence: f64,
}

impl RuleGenerator {
    /// Create a generator with the default `min_confidence` of 0.1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_confidence: 0.1,
        }
    }

    /// Set the minimum confidence threshold (0.0 to 1.0).
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Build the rule table, sorted by descending lift.
    ///
    /// Fails with [`DomainError::InternalConsistency`] if an antecedent or
    /// consequent was not itself mined as frequent, or has zero support.
    pub fn generate(&self, itemsets: &FrequentItemsets) -> Result<RuleTable, DomainError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(DomainError::invalid(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }

        let mut rules = Vec::new();
        for itemset in itemsets.iter().filter(|itemset| itemset.len() >= 2) {
            for size in (1..itemset.len()).rev() {
                for positions in Combinations::new(itemset.len(), size) {
                    let (antecedent, consequent) = split(&itemset.items, &positions);
                    if let Some(rule) = self.rule(itemsets, itemset, &antecedent, &consequent)? {
                        rules.push(rule);
                    }
                }
            }
        }

        Ok(RuleTable::new(rules))
    }

    fn rule(
        &self,
        itemsets: &FrequentItemsets,
        itemset: &Itemset,
        antecedent: &[usize],
        consequent: &[usize],
    ) -> Result<Option<Rule>, DomainError> {
        let head = lookup(itemsets, antecedent, "antecedent")?;
        let tail = lookup(itemsets, consequent, "consequent")?;

        // Counts keep confidence exact: an itemset never outnumbers its subsets.
        let confidence = itemset.count as f64 / head.count as f64;
        if confidence < self.min_confidence {
            return Ok(None);
        }

        let lift = confidence / tail.support;
        let leverage = itemset.support - head.support * tail.support;
        let conviction = (confidence < 1.0).then(|| (1.0 - tail.support) / (1.0 - confidence));

        Ok(Some(Rule {
            antecedent: itemsets.names(antecedent),
            consequent: itemsets.names(consequent),
            antecedent_support: head.support,
            consequent_support: tail.support,
            support: itemset.support,
            confidence,
            lift,
            leverage,
            conviction,
        }))
    }
}

impl Default for RuleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<'a>(
    itemsets: &'a FrequentItemsets,
    items: &[usize],
    side: &str,
) -> Result<&'a Itemset, DomainError> {
    match itemsets.get(items) {
        Some(itemset) if itemset.count > 0 => Ok(itemset),
        Some(_) => Err(DomainError::inconsistent(format!(
            "{side} {items:?} has zero support"
        ))),
        None => Err(DomainError::inconsistent(format!(
            "{side} {items:?} is not a frequent itemset"
        ))),
    }
}

/// Split `items` into the chosen positions and the rest, both keeping order.
fn split(items: &[usize], positions: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut chosen = Vec::with_capacity(positions.len());
    let mut rest = Vec::with_capacity(items.len() - positions.len());
    let mut next = positions.iter().peekable();
    for (i, &item) in items.iter().enumerate() {
        if next.peek() == Some(&&i) {
            chosen.push(item);
            next.next();
        } else {
            rest.push(item);
        }
    }
    (chosen, rest)
}

/// Lexicographic `k`-combinations of `0..n`.
struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.clone()?;
        let k = out.len();

        let mut successor = out.clone();
        // Rightmost position that can still move right.
        let pivot = (0..k).rev().find(|&i| successor[i] < self.n - k + i);
        self.current = pivot.map(|i| {
            successor[i] += 1;
            for j in i + 1..k {
                successor[j] = successor[j - 1] + 1;
            }
            successor
        });

        Some(out)
    }
}
