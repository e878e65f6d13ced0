//! Command-line interface definitions.
//!
//! Defines the CLI structure for the cartwise application using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Frequently-bought-together recommendations from order history
#[derive(Parser, Debug)]
#[command(name = "cartwise")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the cartwise CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train in the background and serve the HTTP API
    Serve,

    /// Recommend products bought together with the given one
    Recommend(RecommendArgs),

    /// Record an order and retrain
    AddOrder(AddOrderArgs),

    /// Show the strongest association rules
    Rules(RulesArgs),

    /// Validate configuration and report on the order file
    Check,
}

/// Arguments for `cartwise recommend`.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Product name; typos are resolved to the closest catalog entry
    pub product: String,
}

/// Arguments for `cartwise add-order`.
#[derive(Args, Debug)]
pub struct AddOrderArgs {
    /// Order identifier
    #[arg(long)]
    pub id: String,

    /// Product in the order (repeat for each product)
    #[arg(long = "product", required = true)]
    pub products: Vec<String>,
}

/// Arguments for `cartwise rules`.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Number of rules to show, ordered by lift
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
