//! Association rules and the rule table served to queries.

use serde::Serialize;

use super::id::ProductName;

/// Directional rule `antecedent → consequent`.
///
/// Both sides are non-empty and disjoint. `support` is the support of their
/// union.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub antecedent: Vec<ProductName>,
    pub consequent: Vec<ProductName>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    /// `support / antecedent_support`, in `(0, 1]`.
    pub confidence: f64,
    /// `confidence / consequent_support`; above 1 means positive association.
    pub lift: f64,
    /// `support - antecedent_support * consequent_support`.
    pub leverage: f64,
    /// `(1 - consequent_support) / (1 - confidence)`; `None` when confidence is 1.
    pub conviction: Option<f64>,
}

impl Rule {
    #[must_use]
    pub fn antecedent_contains(&self, product: &ProductName) -> bool {
        self.antecedent.contains(product)
    }
}

/// Every rule valid for the current training pass, ordered by descending lift.
///
/// A table is built once and never mutated; retraining replaces it whole.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table, stably sorting by descending lift.
    ///
    /// Rules with equal lift keep the order they were given in.
    #[must_use]
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| b.lift.total_cmp(&a.lift));
        Self { rules }
    }

    /// Table with no rules. Still a valid, published model.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rules whose antecedent contains `product`, in table order.
    pub fn with_antecedent<'a>(
        &'a self,
        product: &'a ProductName,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.antecedent_contains(product))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
