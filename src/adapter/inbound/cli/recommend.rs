//! Handler for the `recommend` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::RecommendArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::recommendation::RecommendationService;

/// Train on the order file and print recommendations for one product.
pub fn execute(config: &Config, args: &RecommendArgs) -> Result<()> {
    let recommender = bootstrap::build_recommender(config)?;
    bootstrap::cold_start(&recommender);

    let recommendation = recommender.recommend(&args.product)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "recommend",
            "result": recommendation,
        }));
        return Ok(());
    }

    output::section("Recommendation");
    output::field("Input", &recommendation.input_product);
    output::field("Matched", &recommendation.matched_product);

    if recommendation.recommendations.is_empty() {
        output::note("No products are frequently bought with this one");
        return Ok(());
    }

    output::section("Frequently bought together");
    for (i, product) in recommendation.recommendations.iter().enumerate() {
        output::item(i + 1, product);
    }
    Ok(())
}
