//! Symbol normalization: classify raw user input as crypto or equity and
//! map it to the identifier the providers expect.
//!
//! Pure functions only — no network calls, deterministic, and idempotent
//! (normalizing an already-normalized symbol yields the same result).

use crate::models::asset::{AssetClass, NormalizedAsset};

/// Fixed symbol → CoinGecko id table. Represented as a mapping literal so
/// custom mappings can be added without touching classification logic.
const SYMBOL_TO_COIN_ID: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("SOL", "solana"),
    ("DOGE", "dogecoin"),
    ("BNB", "binancecoin"),
    ("XRP", "ripple"),
    ("ADA", "cardano"),
    ("MATIC", "polygon-pos"),
    ("TRX", "tron"),
    ("LTC", "litecoin"),
    ("DOT", "polkadot"),
];

/// Exchange suffixes for mainland China A-shares (Shanghai, Shenzhen).
/// These markets are knowingly unpriceable by our providers.
const A_SHARE_SUFFIXES: &[&str] = &["SS", "SZ"];

/// Hong Kong tickers are numeric and zero-padded to this width (700 → 0700).
const HK_TICKER_WIDTH: usize = 4;

fn lookup_coin_id(symbol_upper: &str) -> Option<&'static str> {
    SYMBOL_TO_COIN_ID
        .iter()
        .find(|(sym, _)| *sym == symbol_upper)
        .map(|(_, id)| *id)
}

fn is_known_coin_id(symbol_lower: &str) -> bool {
    SYMBOL_TO_COIN_ID.iter().any(|(_, id)| *id == symbol_lower)
}

/// Normalize a raw user-entered symbol into a provider-ready asset.
///
/// Classification rules, in order:
/// 1. Known crypto ticker (case-insensitive) → Crypto with the mapped id.
/// 2. Contains a dot or digit (international tickers) → Equity.
/// 3. Known CoinGecko id ("bitcoin") → Crypto, unchanged.
/// 4. All-uppercase alphabetic but unmapped (AAPL) → Equity, assumed US.
/// 5. Anything else → Crypto with the lowercased symbol as a direct id,
///    which lets users pass CoinGecko ids we have no ticker mapping for.
#[must_use]
pub fn normalize(raw_symbol: &str) -> NormalizedAsset {
    let token = raw_symbol.trim();
    let upper = token.to_uppercase();
    let lower = token.to_lowercase();

    if let Some(coin_id) = lookup_coin_id(&upper) {
        return crypto_asset(raw_symbol, coin_id);
    }

    if token.contains('.') || token.chars().any(|c| c.is_ascii_digit()) {
        return equity_asset(raw_symbol, &upper);
    }

    if is_known_coin_id(&lower) {
        return crypto_asset(raw_symbol, &lower);
    }

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_uppercase()) {
        return equity_asset(raw_symbol, &upper);
    }

    crypto_asset(raw_symbol, &lower)
}

fn crypto_asset(raw: &str, coin_id: &str) -> NormalizedAsset {
    NormalizedAsset {
        original_symbol: raw.to_string(),
        asset_class: AssetClass::Crypto,
        provider_id: coin_id.to_string(),
        exchange_suffix: None,
    }
}

fn equity_asset(raw: &str, upper: &str) -> NormalizedAsset {
    let (ticker, suffix) = split_exchange_suffix(upper);
    NormalizedAsset {
        original_symbol: raw.to_string(),
        asset_class: AssetClass::Equity,
        provider_id: ticker,
        exchange_suffix: suffix,
    }
}

/// Split a trailing exchange suffix off an uppercased ticker and apply
/// market-specific padding. `700.HK` becomes `("0700.HK", Some("HK"))`;
/// suffix-free tickers pass through unchanged.
fn split_exchange_suffix(upper: &str) -> (String, Option<String>) {
    let Some((base, suffix)) = upper.rsplit_once('.') else {
        return (upper.to_string(), None);
    };
    if base.is_empty() || suffix.is_empty() {
        return (upper.to_string(), None);
    }

    let padded_base = if suffix == "HK" && base.chars().all(|c| c.is_ascii_digit()) {
        let width = HK_TICKER_WIDTH;
        format!("{base:0>width$}")
    } else {
        base.to_string()
    };

    (format!("{padded_base}.{suffix}"), Some(suffix.to_string()))
}

/// Whether a suffix denotes a market we refuse to price (A-shares).
#[must_use]
pub fn is_a_share_suffix(suffix: &str) -> bool {
    A_SHARE_SUFFIXES.contains(&suffix)
}
