use thiserror::Error;

/// Unified error type for the entire vaultchain-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The first four variants form the failure taxonomy the fallback
/// resolver pattern-matches on; the rest cover payloads and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Price resolution ────────────────────────────────────────────
    #[error("No price found for {symbol} via {provider}")]
    NotFound { provider: String, symbol: String },

    #[error("Rate limited by {provider}: {message}")]
    RateLimited { provider: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported market {market} for {symbol}")]
    Unsupported { symbol: String, market: String },

    // ── API / payload ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api { provider: String, message: String },

    #[error("No provider available for asset class: {0}")]
    NoProvider(String),

    // ── Input validation ────────────────────────────────────────────
    #[error("Invalid holding: {0}")]
    InvalidHolding(String),
}

impl CoreError {
    /// True when the failure came from an upstream request quota.
    /// The CLI uses this to advise the user to wait before retrying.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CoreError::RateLimited { .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
