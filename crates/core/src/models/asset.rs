use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The market class of a tracked asset.
/// Determines which provider chain is used for fetching prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    /// Cryptocurrencies (BTC, ETH, direct CoinGecko ids) — CoinGecko spot API
    Crypto,
    /// Stocks / ETFs (AAPL, 0700.HK, RIO.L) — Alpha Vantage with Yahoo fallback
    Equity,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Crypto => write!(f, "Crypto"),
            AssetClass::Equity => write!(f, "Equity"),
        }
    }
}

/// A user-entered position: symbol exactly as typed, plus quantity held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
}

impl Holding {
    /// Create a validated holding. The symbol must be non-empty after
    /// trimming and the quantity must be finite and non-negative.
    pub fn new(symbol: impl Into<String>, quantity: f64) -> Result<Self, CoreError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(CoreError::InvalidHolding("symbol must not be empty".into()));
        }
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(CoreError::InvalidHolding(format!(
                "quantity for {symbol} must be a non-negative number, got {quantity}"
            )));
        }
        Ok(Self { symbol, quantity })
    }
}

/// The result of normalizing a raw user symbol: classified, mapped to the
/// identifier the providers expect, with any exchange suffix extracted.
///
/// Derived deterministically from the raw symbol and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAsset {
    /// Symbol exactly as the user entered it (kept for reporting).
    pub original_symbol: String,

    pub asset_class: AssetClass,

    /// Identifier used against providers: a CoinGecko id ("bitcoin") for
    /// crypto, or the uppercased, suffix-padded ticker ("0700.HK") for equity.
    pub provider_id: String,

    /// Listing-market suffix without the dot ("HK", "T", "L"), if any.
    pub exchange_suffix: Option<String>,
}

impl NormalizedAsset {
    /// True when the asset is listed on a market we knowingly cannot price
    /// (mainland China A-shares). Adapters refuse these with `Unsupported`.
    #[must_use]
    pub fn is_unsupported_market(&self) -> bool {
        matches!(self.exchange_suffix.as_deref(), Some("SS") | Some("SZ"))
    }
}
