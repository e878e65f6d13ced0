//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod order;
pub mod output;
pub mod recommend;
pub mod rules;
pub mod serve;

use command::{Cli, Commands};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load configuration, set up logging and output, then run the command.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = Config::load(&cli.config)?;
    config.init_logging();

    match cli.command {
        Commands::Serve => serve::execute(&config).await,
        Commands::Recommend(args) => recommend::execute(&config, &args),
        Commands::AddOrder(args) => order::execute(&config, &args),
        Commands::Rules(args) => rules::execute(&config, &args),
        Commands::Check => check::execute(&cli.config, &config),
    }
}
