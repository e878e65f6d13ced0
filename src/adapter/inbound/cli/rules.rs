//! Handler for the `rules` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::RulesArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{ProductName, Rule};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::recommendation::RecommendationService;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Antecedent")]
    antecedent: String,
    #[tabled(rename = "Consequent")]
    consequent: String,
    #[tabled(rename = "Support")]
    support: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Lift")]
    lift: String,
}

fn join(products: &[ProductName]) -> String {
    products
        .iter()
        .map(ProductName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            antecedent: join(&rule.antecedent),
            consequent: join(&rule.consequent),
            support: format!("{:.4}", rule.support),
            confidence: format!("{:.3}", rule.confidence),
            lift: format!("{:.3}", rule.lift),
        }
    }
}

/// Train and print the top rules by lift.
pub fn execute(config: &Config, args: &RulesArgs) -> Result<()> {
    let recommender = bootstrap::build_recommender(config)?;
    bootstrap::cold_start(&recommender);
    let rules = recommender.top_rules(args.limit)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "rules",
            "rules": rules,
        }));
        return Ok(());
    }

    output::section(&format!("Top {} rule(s) by lift", rules.len()));
    if rules.is_empty() {
        output::note("No rules met the configured thresholds");
        return Ok(());
    }

    let table = Table::new(rules.iter().map(RuleRow::from)).to_string();
    output::lines(&table);
    Ok(())
}
