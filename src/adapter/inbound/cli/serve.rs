//! Handler for the `serve` command.

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Start the HTTP server; returns on Ctrl-C.
pub async fn execute(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", addr);
    output::field("Orders", config.data.orders_path.display());
    output::note("Training in the background; /recommend answers 503 until ready");

    bootstrap::run_server(config).await
}
