//! VaultChain Tracker CLI
//!
//! Values crypto/equity holdings at current market prices and exports a
//! timestamped CSV. Holdings come from an inline argument, a file, a
//! preset, or an interactive prompt; `--watch` repeats the full
//! resolve-and-report cycle at a fixed interval.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultchain_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("vaultchain_cli=info".parse()?)
                .add_directive("vaultchain_core=info".parse()?),
        )
        .init();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    vaultchain_cli::run(cli).await
}
