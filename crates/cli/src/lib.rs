pub mod cli;
pub mod holdings;
pub mod output;
pub mod run;

use anyhow::Result;

pub const BANNER: &str = "VaultChain-Tracker v0.1 - Privacy-first Crypto/Stock Tracker";

/// Top-level dispatch: non-interactive when any holdings input was given
/// on the command line, otherwise an interactive prompt loop.
pub async fn run(cli: cli::Cli) -> Result<()> {
    println!("{BANNER}");
    println!("- Real-time prices (BTC, ETH, AAPL)");
    println!("- Local portfolio tracking");
    println!("- CSV export\n");

    if cli.examples {
        holdings::print_examples();
        return Ok(());
    }

    let tracker = run::build_tracker();

    if cli.has_holdings_input() {
        run::run_batch(&tracker, &cli).await
    } else {
        run::run_interactive(&tracker).await
    }
}
