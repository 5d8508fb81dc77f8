use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::price::PriceSource;

/// One line of the valuation report. `source == None` marks an asset whose
/// price could not be resolved this cycle; such rows keep price and value
/// at zero but are never dropped from the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRow {
    /// Symbol as the user entered it.
    pub symbol: String,
    pub quantity: f64,
    /// Unit price in USD, rounded to 6 decimals. Zero when unresolved.
    pub unit_price_usd: f64,
    /// quantity × unit price, rounded to 2 decimals. Zero when unresolved.
    pub value_usd: f64,
    /// Fallback tier that produced the price; `None` when unresolved.
    pub source: Option<PriceSource>,
}

impl ValuationRow {
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.source.is_none()
    }
}

/// The full valuation report for one cycle: rows in the holdings' input
/// order plus a grand total. Unresolved rows contribute zero to the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub rows: Vec<ValuationRow>,
    /// Sum of `value_usd` over all rows, rounded to 2 decimals.
    pub total_usd: f64,
    /// Set when any per-asset failure this cycle was a rate limit, so the
    /// CLI can advise waiting before the next attempt.
    pub rate_limited: bool,
    pub generated_at: DateTime<Utc>,
}

impl ReportTable {
    /// Number of holdings that could not be priced this cycle.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_unresolved()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// CSV column headers, matching the exported artifact.
    pub const CSV_HEADERS: [&'static str; 4] = ["Asset", "Quantity", "Price(USD)", "Value(USD)"];

    /// Rows in CSV cell shape, including the trailing `Total` row.
    /// File-writing mechanics stay with the caller.
    #[must_use]
    pub fn csv_rows(&self) -> Vec<[String; 4]> {
        let mut out: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.symbol.clone(),
                    format_quantity(r.quantity),
                    format!("{:.6}", r.unit_price_usd),
                    format!("{:.2}", r.value_usd),
                ]
            })
            .collect();
        out.push([
            "Total".into(),
            "-".into(),
            "-".into(),
            format!("{:.2}", self.total_usd),
        ]);
        out
    }
}

/// Quantities print without trailing zero noise (1 rather than 1.000000),
/// but fractional amounts keep their precision.
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

/// Round a unit price to 6 decimal places for reporting.
#[must_use]
pub fn round_price(price: f64) -> f64 {
    (price * 1e6).round() / 1e6
}

/// Round a position value to 2 decimal places (cents).
#[must_use]
pub fn round_value(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
