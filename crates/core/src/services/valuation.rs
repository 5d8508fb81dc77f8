use chrono::Utc;

use crate::models::asset::Holding;
use crate::models::report::{round_price, round_value, ReportTable, ValuationRow};
use crate::services::resolver::PriceResolver;
use crate::symbols;

/// Turns holdings into a valuation report by normalizing each symbol and
/// running it through the fallback resolver.
///
/// Pure orchestration — no I/O of its own. Assets are priced strictly
/// sequentially to respect upstream rate limits (Alpha Vantage allows
/// ~25 requests/day on the free tier).
pub struct PortfolioValuator;

impl PortfolioValuator {
    pub fn new() -> Self {
        Self
    }

    /// Value a set of holdings. Per-asset failures degrade to a zero-priced
    /// row flagged as unresolved; they never abort the run or get dropped.
    /// Row order follows the input holdings order.
    pub async fn value(&self, holdings: &[Holding], resolver: &PriceResolver) -> ReportTable {
        let mut rows = Vec::with_capacity(holdings.len());
        let mut total = 0.0;
        let mut rate_limited = false;

        for holding in holdings {
            let asset = symbols::normalize(&holding.symbol);
            match resolver.resolve(&asset).await {
                Ok(resolved) => {
                    let unit_price = round_price(resolved.price_usd);
                    let value = round_value(holding.quantity * resolved.price_usd);
                    total += value;
                    rows.push(ValuationRow {
                        symbol: holding.symbol.clone(),
                        quantity: holding.quantity,
                        unit_price_usd: unit_price,
                        value_usd: value,
                        source: Some(resolved.source),
                    });
                }
                Err(err) => {
                    if err.is_rate_limited() {
                        rate_limited = true;
                    }
                    rows.push(ValuationRow {
                        symbol: holding.symbol.clone(),
                        quantity: holding.quantity,
                        unit_price_usd: 0.0,
                        value_usd: 0.0,
                        source: None,
                    });
                }
            }
        }

        ReportTable {
            rows,
            total_usd: round_value(total),
            rate_limited,
            generated_at: Utc::now(),
        }
    }
}

impl Default for PortfolioValuator {
    fn default() -> Self {
        Self::new()
    }
}
