//! Handler for the `check` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::recommendation::RecommendationService;

/// Report on a configuration that already loaded and validated.
pub fn execute(config_path: &Path, config: &Config) -> Result<()> {
    let orders_path = &config.data.orders_path;
    let present = orders_path.exists();
    let status = bootstrap::build_recommender(config)?.status();

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "config": config_path.display().to_string(),
            "orders_path": orders_path.display().to_string(),
            "orders_file_present": present,
            "orders": status.orders,
            "products": status.products,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::success("Configuration file is valid");

    output::section("Order data");
    output::field("Path", orders_path.display());
    if present {
        output::field("Orders", status.orders);
        output::field("Products", status.products);
    } else {
        output::warning("Order file not found; the service will start with no history");
    }

    output::field("Support", config.training.min_support);
    output::field("Confidence", config.training.min_confidence);
    output::success("Configuration check complete");
    Ok(())
}
