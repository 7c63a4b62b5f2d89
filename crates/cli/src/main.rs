//! nr-dashboard-utility - copy New Relic dashboards between accounts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load and validate the migration configuration.
//! - Run the migration with one NerdGraph client per account.
//! - Write the CSV report and log the run summary.
//!
//! Does NOT handle:
//! - Export/import logic (see `crates/migrate`).
//! - GraphQL transport (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Configuration errors abort before any request is sent.
//! - Per-dashboard failures never change the exit code.

mod args;
mod error;
mod logging;
mod report;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use logging::Verbosity;
use nerdgraph_client::NerdGraphClient;
use nerdgraph_config::{ConfigError, ConfigLoader, MigrationConfig};
use nerdgraph_migrate::{TracingEvents, migrate};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.debug));

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config.display()
        )
    })?;
    tracing::debug!(
        source = %config.source.account_id,
        target = %config.target.account_id,
        dashboards = config.dashboards.len(),
        export_concurrency = config.concurrency.export,
        import_concurrency = config.concurrency.import,
        endpoint = %config.endpoint,
        "Configuration is valid"
    );

    let source = NerdGraphClient::builder()
        .from_account(&config.source)
        .endpoint(config.endpoint.clone())
        .build()
        .context("Failed to build source account client")?;
    let target = NerdGraphClient::builder()
        .from_account(&config.target)
        .endpoint(config.endpoint.clone())
        .build()
        .context("Failed to build target account client")?;

    let report = migrate(&source, &target, &config, &TracingEvents).await;

    if let Some(path) = &cli.output {
        report::write_report(&report.records, path).await?;
        tracing::info!(path = %path.display(), "Finished writing results CSV");
    }

    tracing::info!("{}", report::summary_line(&report.summary));
    Ok(())
}

/// Build the configuration: file, then environment, then CLI overrides.
fn load_config(cli: &Cli) -> Result<MigrationConfig, ConfigError> {
    tracing::debug!(path = %cli.config.display(), "Validating configuration");

    let mut loader = ConfigLoader::new()
        .with_config_path(cli.config.clone())
        .from_file()?
        .from_env();

    if let Some(url) = cli.endpoint.as_ref().filter(|url| !url.trim().is_empty()) {
        loader = loader.with_endpoint(url.trim().to_string());
    }
    if let Some(value) = cli.export_concurrency {
        loader = loader.with_export_concurrency(value);
    }
    if let Some(value) = cli.import_concurrency {
        loader = loader.with_import_concurrency(value);
    }

    loader.build()
}
