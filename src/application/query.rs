//! Ranking of co-purchased products for a resolved catalog entry.

use crate::domain::{ProductName, Rule, RuleTable};

/// Default number of recommendations returned per query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Selects rules by antecedent and collects their consequents.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    max_results: usize,
}

impl QueryEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Products most often bought with `product`, strongest first.
    ///
    /// Rules whose antecedent contains `product` are ordered by descending
    /// confidence; equal confidences keep table order, so lift acts as the
    /// secondary key. Consequents are collected in that order without
    /// duplicates and without `product` itself. An empty result is valid.
    #[must_use]
    pub fn recommend(&self, rules: &RuleTable, product: &ProductName) -> Vec<ProductName> {
        let mut selected: Vec<&Rule> = rules.with_antecedent(product).collect();
        selected.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let mut collected: Vec<ProductName> = Vec::new();
        for rule in selected {
            for item in &rule.consequent {
                if collected.len() == self.max_results {
                    return collected;
                }
                if item != product && !collected.contains(item) {
                    collected.push(item.clone());
                }
            }
        }
        collected
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(antecedent: &[&str], consequent: &[&str], confidence: f64, lift: f64) -> Rule {
        Rule {
            antecedent: antecedent.iter().map(|&n| n.into()).collect(),
            consequent: consequent.iter().map(|&n| n.into()).collect(),
            antecedent_support: 0.5,
            consequent_support: 0.5,
            support: 0.25,
            confidence,
            lift,
            leverage: 0.0,
            conviction: None,
        }
    }

    fn names(products: &[ProductName]) -> Vec<&str> {
        products.iter().map(ProductName::as_str).collect()
    }

    #[test]
    fn orders_by_confidence_then_lift() {
        let table = RuleTable::new(vec![
            rule(&["A"], &["B"], 0.4, 3.0),
            rule(&["A"], &["C"], 0.9, 1.0),
            rule(&["A"], &["D"], 0.4, 5.0),
        ]);

        let recs = QueryEngine::new().recommend(&table, &"A".into());
        assert_eq!(names(&recs), vec!["C", "D", "B"]);
    }

    #[test]
    fn skips_matched_product_and_duplicates() {
        let table = RuleTable::new(vec![
            rule(&["A", "B"], &["C"], 1.0, 2.0),
            rule(&["A"], &["B", "C"], 0.8, 1.5),
            rule(&["A", "C"], &["B"], 0.7, 1.2),
        ]);

        let recs = QueryEngine::new().recommend(&table, &"A".into());
        assert_eq!(names(&recs), vec!["C", "B"]);
    }

    #[test]
    fn ignores_rules_where_product_is_only_a_consequent() {
        let table = RuleTable::new(vec![rule(&["B"], &["A"], 1.0, 2.0)]);
        let recs = QueryEngine::new().recommend(&table, &"A".into());
        assert!(recs.is_empty());
    }

    #[test]
    fn caps_results() {
        let rules = ["B", "C", "D", "E", "F", "G", "H"]
            .iter()
            .map(|&c| rule(&["A"], &[c], 0.5, 1.0))
            .collect();
        let table = RuleTable::new(rules);

        let recs = QueryEngine::new().recommend(&table, &"A".into());
        assert_eq!(names(&recs), vec!["B", "C", "D", "E", "F"]);

        let recs = QueryEngine::new().with_max_results(2).recommend(&table, &"A".into());
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn unknown_product_yields_empty_list() {
        let table = RuleTable::new(vec![rule(&["A"], &["B"], 1.0, 1.0)]);
        assert!(QueryEngine::new().recommend(&table, &"Z".into()).is_empty());
    }
}
