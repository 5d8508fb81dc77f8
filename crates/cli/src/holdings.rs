//! Holdings input parsing and sample data.
//!
//! Accepts strict JSON objects and, for convenience, single-quoted dict
//! literals (`{'BTC': 0.01}`) as the original prompt examples use.
//! Entry order is preserved (serde_json's `preserve_order` feature).

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;

use vaultchain_core::models::asset::Holding;

use crate::cli::Preset;

pub const EXAMPLE_FORMAT: &str = "{'BTC': 0.01, 'ETH': 0.2, 'SOL': 3}";

/// Parse raw holdings text into validated holdings, keeping input order.
pub fn parse_holdings(raw: &str) -> Result<Vec<Holding>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // Strict JSON first; fall back to substituting single quotes so that
    // {'BTC': 0.01} style input works as well. The substitution is only
    // attempted when the input has no double quotes at all — an apostrophe
    // inside a JSON string must not be rewritten into a broken document.
    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) if !trimmed.contains('"') => {
            serde_json::from_str(&trimmed.replace('\'', "\""))
                .map_err(|_| anyhow!("Invalid holdings format. Example: {EXAMPLE_FORMAT}"))?
        }
        Err(_) => bail!("Invalid holdings format. Example: {EXAMPLE_FORMAT}"),
    };

    let Value::Object(map) = value else {
        bail!("Holdings must be an object of symbol: quantity pairs. Example: {EXAMPLE_FORMAT}");
    };

    let mut holdings = Vec::with_capacity(map.len());
    for (symbol, quantity) in map {
        let quantity = quantity
            .as_f64()
            .ok_or_else(|| anyhow!("Invalid quantity for {symbol}: {quantity}"))?;
        let holding = Holding::new(symbol, quantity)?;
        holdings.push(holding);
    }
    Ok(holdings)
}

/// Read and parse a holdings file.
pub fn parse_holdings_file(path: &str) -> Result<Vec<Holding>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read holdings file {path}"))?;
    parse_holdings(&raw)
}

/// Predefined sample holdings, matching the `--preset` choices.
#[must_use]
pub fn preset_holdings(preset: Preset) -> Vec<Holding> {
    let entries: &[(&str, f64)] = match preset {
        Preset::Stocks => &[("AAPL", 1.0), ("MSFT", 1.0), ("NVDA", 1.0)],
        Preset::Crypto => &[("BTC", 0.01), ("ETH", 0.2), ("SOL", 3.0)],
        Preset::Mix => &[("BTC", 0.005), ("AAPL", 1.0), ("ETH", 0.1)],
        Preset::Intl => &[("700.HK", 2.0), ("7203.T", 1.0), ("RIO.L", 3.0)],
        Preset::Etf => &[("SPY", 1.0), ("QQQ", 1.0), ("VTI", 1.0)],
    };
    entries
        .iter()
        .map(|(symbol, quantity)| Holding {
            symbol: (*symbol).to_string(),
            quantity: *quantity,
        })
        .collect()
}

pub fn print_examples() {
    println!("Examples (copy/paste one line):");
    println!("- Crypto: {{'BTC': 0.01, 'ETH': 0.2, 'SOL': 3}}");
    println!("- Stocks (US): {{'AAPL': 1, 'MSFT': 2, 'NVDA': 1}}");
    println!("- ETF: {{'SPY': 1, 'QQQ': 1, 'VTI': 1}}");
    println!("- International: {{'700.HK': 2, '7203.T': 1, 'RIO.L': 3}}");
    println!("- Mixed: {{'BTC': 0.005, 'AAPL': 1}}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_json() {
        let holdings = parse_holdings(r#"{"BTC": 0.01, "ETH": 0.2}"#).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].symbol, "BTC");
        assert_eq!(holdings[0].quantity, 0.01);
    }

    #[test]
    fn parses_single_quoted_literals() {
        let holdings = parse_holdings("{'BTC': 0.01, 'SOL': 3}").unwrap();
        assert_eq!(holdings[1].symbol, "SOL");
        assert_eq!(holdings[1].quantity, 3.0);
    }

    #[test]
    fn apostrophe_inside_a_json_symbol_survives() {
        let holdings = parse_holdings(r#"{"O'REILLY": 1}"#).unwrap();
        assert_eq!(holdings[0].symbol, "O'REILLY");
    }

    #[test]
    fn mixed_quote_input_is_rejected() {
        let err = parse_holdings(r#"{"BTC": 0.01, 'ETH': 0.2}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid holdings format"));
    }

    #[test]
    fn preserves_entry_order() {
        let holdings = parse_holdings(r#"{"ZEC": 1, "AAPL": 2, "BTC": 3}"#).unwrap();
        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ZEC", "AAPL", "BTC"]);
    }

    #[test]
    fn empty_input_is_empty_holdings() {
        assert!(parse_holdings("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object_input() {
        assert!(parse_holdings("[1, 2, 3]").is_err());
        assert!(parse_holdings("garbage").is_err());
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        assert!(parse_holdings(r#"{"BTC": "lots"}"#).is_err());
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(parse_holdings(r#"{"BTC": -1}"#).is_err());
    }

    #[test]
    fn error_message_shows_the_example() {
        let err = parse_holdings("not json").unwrap_err().to_string();
        assert!(err.contains(EXAMPLE_FORMAT));
    }

    #[test]
    fn presets_are_non_empty() {
        for preset in [
            Preset::Stocks,
            Preset::Crypto,
            Preset::Mix,
            Preset::Intl,
            Preset::Etf,
        ] {
            assert_eq!(preset_holdings(preset).len(), 3);
        }
    }
}
