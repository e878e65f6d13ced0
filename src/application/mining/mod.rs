//! Market-basket mining: frequent itemsets and association rules.
//!
//! - [`Apriori`]: level-wise frequent itemset search over a transaction matrix
//! - [`RuleGenerator`]: expands frequent itemsets into a lift-ordered rule table

mod apriori;
mod rules;

pub use apriori::Apriori;
pub use rules::RuleGenerator;
