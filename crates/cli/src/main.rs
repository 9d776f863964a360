//! bblearn - Blackboard Learn command-line client
//!
//! Main entry point.

use anyhow::Context;
use bblearn_cli::utils::logging::init_tracing;
use bblearn_cli::{execute, AppContext, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let cli = Cli::parse();

    let ctx = AppContext::new(cli.config.clone())
        .context("failed to load Blackboard configuration")?;
    let output = execute(&ctx, &cli.command, cli.token.as_deref(), cli.json)
        .await
        .with_context(|| format!("`{}` failed", cli.command.name()))?;

    println!("{output}");
    Ok(())
}
