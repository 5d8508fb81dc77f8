use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which tier of the fallback chain produced a price.
/// Surfaced in reports so the user can judge data freshness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSource {
    /// Live market quote (Alpha Vantage GLOBAL_QUOTE).
    Realtime,
    /// Most recent end-of-day settlement (Alpha Vantage TIME_SERIES_DAILY).
    DailyClose,
    /// Independent backup provider (Yahoo Finance).
    AlternateProvider,
    /// CoinGecko simple-price spot endpoint (crypto only).
    CoinGeckoSpot,
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSource::Realtime => write!(f, "Realtime"),
            PriceSource::DailyClose => write!(f, "DailyClose"),
            PriceSource::AlternateProvider => write!(f, "Alternate"),
            PriceSource::CoinGeckoSpot => write!(f, "CoinGecko"),
        }
    }
}

/// A single successful fetch from one provider. Created per resolution
/// attempt, never persisted beyond the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub provider_id: String,
    pub price_usd: f64,
    pub source: PriceSource,
    pub timestamp: DateTime<Utc>,
}

impl PriceQuote {
    pub fn now(provider_id: impl Into<String>, price_usd: f64, source: PriceSource) -> Self {
        Self {
            provider_id: provider_id.into(),
            price_usd,
            source,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of running the fallback chain for one asset: the unit price in
/// USD plus which tier supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    pub price_usd: f64,
    pub source: PriceSource,
}
