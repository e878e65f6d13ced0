//! Handler for the `add-order` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::AddOrderArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::recommendation::RecommendationService;

/// Append an order to the order file and retrain.
pub fn execute(config: &Config, args: &AddOrderArgs) -> Result<()> {
    let recommender = bootstrap::build_recommender(config)?;
    let order = recommender.add_order(&args.id, &args.products)?;
    let status = recommender.status();

    if output::is_json() {
        output::json_output(json!({
            "command": "add_order",
            "order_id": order.id(),
            "products": order.products(),
            "status": status,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Order {} added with {} product(s)",
        order.id(),
        order.products().len()
    ));
    output::field("Orders", status.orders);
    output::field("Products", status.products);
    output::field("Rules", status.rules);
    if !status.ready {
        output::warning("Retraining failed; see logs");
    }
    Ok(())
}
