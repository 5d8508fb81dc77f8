//! Command execution: batch runs, watch cycles, and the interactive loop.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use vaultchain_core::models::asset::Holding;
use vaultchain_core::VaultChainTracker;

use crate::cli::{Cli, DEFAULT_WATCH_SECONDS};
use crate::holdings::{self, EXAMPLE_FORMAT};
use crate::output;

const ALPHA_VANTAGE_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// Build the tracker from environment configuration. Equity pricing still
/// works without the key, via the alternate provider only.
pub fn build_tracker() -> VaultChainTracker {
    let key = std::env::var(ALPHA_VANTAGE_KEY_VAR)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    if key.is_none() {
        warn!("{ALPHA_VANTAGE_KEY_VAR} not set — equity prices will use the alternate provider only");
    }
    VaultChainTracker::new(key.as_deref())
}

/// One full resolve-and-report cycle: value, print, export.
///
/// Nothing here is fatal — a failed CSV export is reported and the cycle
/// still counts as complete, so watch mode keeps running.
pub async fn report_cycle(tracker: &VaultChainTracker, holdings: &[Holding], export_dir: &Path) {
    let table = tracker.value_portfolio(holdings).await;

    for row in &table.rows {
        match row.source {
            Some(source) => debug!(symbol = %row.symbol, %source, "resolved"),
            None => warn!(symbol = %row.symbol, "could not resolve a price"),
        }
    }

    output::print_table(&table);
    match output::export_csv(&table, export_dir) {
        Ok(Some(path)) => {
            info!("Exported to {}", path.display());
            println!("Exported to {}", path.display());
        }
        Ok(None) => {}
        Err(e) => {
            warn!("CSV export failed: {e:#}");
            println!("Failed to export CSV: {e:#}");
        }
    }
}

/// Repeat the full cycle at a fixed interval. A cycle completes fully,
/// including the CSV export, before the next sleep begins; an interrupt
/// terminates the process between cycles.
pub async fn watch(tracker: &VaultChainTracker, holdings: &[Holding], interval: u64) {
    let interval = if interval == 0 {
        DEFAULT_WATCH_SECONDS
    } else {
        interval
    };
    println!("Watching portfolio every {interval} seconds. Press Ctrl+C to stop.\n");
    loop {
        report_cycle(tracker, holdings, Path::new(".")).await;
        tokio::time::sleep(Duration::from_secs(interval)).await;
    }
}

/// Non-interactive path: holdings came from a flag, a file, or a preset.
pub async fn run_batch(tracker: &VaultChainTracker, cli: &Cli) -> Result<()> {
    let holdings = if let Some(path) = &cli.holdings_file {
        holdings::parse_holdings_file(path)?
    } else if let Some(raw) = &cli.holdings {
        holdings::parse_holdings(raw)?
    } else if let Some(preset) = cli.preset {
        holdings::preset_holdings(preset)
    } else {
        Vec::new()
    };

    if holdings.is_empty() {
        bail!("No holdings provided. Use format {EXAMPLE_FORMAT}");
    }

    report_cycle(tracker, &holdings, Path::new(".")).await;
    if let Some(interval) = cli.watch {
        watch(tracker, &holdings, interval).await;
    }
    Ok(())
}

/// Interactive fallback loop when no holdings input flags were given.
pub async fn run_interactive(tracker: &VaultChainTracker) -> Result<()> {
    let stdin = std::io::stdin();
    loop {
        print!("Enter holdings (e.g., {EXAMPLE_FORMAT}) or 'quit' (or type 'examples'): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "quit" => break,
            "examples" => {
                holdings::print_examples();
                continue;
            }
            _ => {}
        }

        let holdings = match holdings::parse_holdings(input) {
            Ok(h) if !h.is_empty() => h,
            Ok(_) => {
                println!("No holdings provided.");
                continue;
            }
            Err(e) => {
                println!("Error: {e}");
                continue;
            }
        };

        report_cycle(tracker, &holdings, Path::new(".")).await;

        print!("Type 'watch' to refresh every 5 minutes, or press Enter to continue: ");
        std::io::stdout().flush()?;
        let mut follow_up = String::new();
        stdin.lock().read_line(&mut follow_up)?;
        if follow_up.trim().eq_ignore_ascii_case("watch") {
            watch(tracker, &holdings, DEFAULT_WATCH_SECONDS).await;
        }
    }

    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultchain_core::providers::registry::PriceProviderRegistry;

    #[tokio::test]
    async fn report_cycle_survives_a_failing_csv_export() {
        // Empty registry keeps the cycle off the network; the export
        // directory does not exist, so the CSV write must fail. The cycle
        // has to complete anyway — a lost export never ends watch mode.
        let tracker = VaultChainTracker::with_registry(PriceProviderRegistry::new());
        let holdings = vec![Holding::new("BTC", 1.0).unwrap()];
        let missing_dir = std::env::temp_dir()
            .join(format!("vaultchain_gone_{}", std::process::id()))
            .join("nested");

        report_cycle(&tracker, &holdings, &missing_dir).await;
    }
}
