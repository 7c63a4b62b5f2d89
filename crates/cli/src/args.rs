//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not load or validate the YAML configuration (see `main`).
//! - Does not configure logging (see `logging`).

use clap::Parser;
use nerdgraph_config::constants::ENV_GRAPHQL_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nr-dashboard-utility")]
#[command(about = "Copy New Relic dashboards from one account to another", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  nr-dashboard-utility -c migrate.yml\n  nr-dashboard-utility -c migrate.yml -o report.csv --verbose\n  nr-dashboard-utility -c migrate.yml --export-concurrency 8 --import-concurrency 2\n"
)]
pub struct Cli {
    /// YAML configuration file describing the source, target, and dashboards
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// CSV report file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging (trace level, includes GraphQL bodies)
    #[arg(short, long)]
    pub debug: bool,

    /// NerdGraph endpoint URL (e.g., https://api.eu.newrelic.com/graphql)
    #[arg(long, env = ENV_GRAPHQL_URL, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Number of dashboards exported at the same time
    #[arg(long, value_name = "N")]
    pub export_concurrency: Option<usize>,

    /// Number of dashboards imported at the same time
    #[arg(long, value_name = "N")]
    pub import_concurrency: Option<usize>,
}
