use clap::{Parser, ValueEnum};

/// Default watch-mode refresh interval in seconds.
pub const DEFAULT_WATCH_SECONDS: u64 = 300;

#[derive(Parser, Debug)]
#[command(name = "vaultchain", about = "VaultChain-Tracker CLI", version)]
pub struct Cli {
    /// Holdings as a JSON object, e.g. {"BTC": 0.01, "ETH": 0.2, "SOL": 3}
    /// (single-quoted keys are accepted too)
    #[arg(long)]
    pub holdings: Option<String>,

    /// Path to a file containing holdings as JSON
    #[arg(long)]
    pub holdings_file: Option<String>,

    /// Use a predefined sample holdings set
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Print example inputs and exit
    #[arg(long)]
    pub examples: bool,

    /// Watch mode: refresh interval in seconds (default 300 when the flag
    /// is given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = "300")]
    pub watch: Option<u64>,
}

impl Cli {
    /// True when holdings were supplied non-interactively.
    #[must_use]
    pub fn has_holdings_input(&self) -> bool {
        self.holdings.is_some() || self.holdings_file.is_some() || self.preset.is_some()
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Stocks,
    Crypto,
    Mix,
    Intl,
    Etf,
}
