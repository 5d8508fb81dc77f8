use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::{reject_unsupported_market, PriceProvider};
use crate::errors::CoreError;
use crate::models::asset::{AssetClass, NormalizedAsset};
use crate::models::price::{PriceQuote, PriceSource};

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage free tier allows ~25 requests per day across all
/// endpoints, which is why the resolver runs strictly sequentially.
///
/// Two adapters share this module: the realtime `GLOBAL_QUOTE` tier and
/// the `TIME_SERIES_DAILY` close tier. Both require the same API key and
/// both refuse A-share listings up front.
fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
}

#[derive(Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyData>>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Deserialize)]
struct DailyData {
    #[serde(rename = "4. close")]
    close: String,
}

/// The quota notice arrives as a `Note` or `Information` field in an
/// otherwise well-formed 200 response, not as an HTTP error.
fn quota_notice(note: Option<String>, information: Option<String>) -> Option<String> {
    note.or(information)
}

// ── Realtime quote adapter ──────────────────────────────────────────

/// Alpha Vantage `GLOBAL_QUOTE` adapter — the primary equity tier.
///
/// A blank or zero price in an otherwise successful payload is treated as
/// `NotFound` rather than a hard error, because the API silently returns
/// empty quotes for symbols it cannot serve.
pub struct AlphaVantageQuoteProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageQuoteProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(),
            api_key,
        }
    }
}

#[async_trait]
impl PriceProvider for AlphaVantageQuoteProvider {
    fn name(&self) -> &str {
        "Alpha Vantage quote"
    }

    fn source(&self) -> PriceSource {
        PriceSource::Realtime
    }

    fn supported_asset_classes(&self) -> Vec<AssetClass> {
        vec![AssetClass::Equity]
    }

    async fn fetch(&self, asset: &NormalizedAsset) -> Result<PriceQuote, CoreError> {
        reject_unsupported_market(asset)?;

        let resp: GlobalQuoteResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", asset.provider_id.as_str()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse quote for {}: {e}", asset.provider_id),
            })?;

        if let Some(notice) = quota_notice(resp.note, resp.information) {
            return Err(CoreError::RateLimited {
                provider: "Alpha Vantage".into(),
                message: notice,
            });
        }

        let price_usd: f64 = match resp.global_quote.and_then(|q| q.price) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Invalid price format for {}: {e}", asset.provider_id),
            })?,
            _ => {
                return Err(CoreError::NotFound {
                    provider: "Alpha Vantage quote".into(),
                    symbol: asset.original_symbol.clone(),
                })
            }
        };

        // Zero is conflated with missing: blank payloads and zero quotes
        // both hand the asset to the daily-close tier.
        if price_usd == 0.0 {
            return Err(CoreError::NotFound {
                provider: "Alpha Vantage quote".into(),
                symbol: asset.original_symbol.clone(),
            });
        }

        Ok(PriceQuote::now(&asset.provider_id, price_usd, self.source()))
    }
}

// ── Daily close adapter ─────────────────────────────────────────────

/// Alpha Vantage `TIME_SERIES_DAILY` adapter — the second equity tier.
/// Returns the close price of the most recent trading day.
pub struct AlphaVantageDailyProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageDailyProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(),
            api_key,
        }
    }
}

#[async_trait]
impl PriceProvider for AlphaVantageDailyProvider {
    fn name(&self) -> &str {
        "Alpha Vantage daily"
    }

    fn source(&self) -> PriceSource {
        PriceSource::DailyClose
    }

    fn supported_asset_classes(&self) -> Vec<AssetClass> {
        vec![AssetClass::Equity]
    }

    async fn fetch(&self, asset: &NormalizedAsset) -> Result<PriceQuote, CoreError> {
        reject_unsupported_market(asset)?;

        let resp: TimeSeriesResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", asset.provider_id.as_str()),
                ("outputsize", "compact"),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse time series for {}: {e}", asset.provider_id),
            })?;

        if let Some(notice) = quota_notice(resp.note, resp.information) {
            return Err(CoreError::RateLimited {
                provider: "Alpha Vantage".into(),
                message: notice,
            });
        }

        let time_series = resp.time_series.ok_or_else(|| CoreError::NotFound {
            provider: "Alpha Vantage daily".into(),
            symbol: asset.original_symbol.clone(),
        })?;

        // Dates are ISO-formatted, so the lexicographic max is the latest day.
        let latest = time_series
            .iter()
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .ok_or_else(|| CoreError::NotFound {
                provider: "Alpha Vantage daily".into(),
                symbol: asset.original_symbol.clone(),
            })?;

        let price_usd: f64 = latest.1.close.parse().map_err(|e| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("Invalid close format for {}: {e}", asset.provider_id),
        })?;

        Ok(PriceQuote::now(&asset.provider_id, price_usd, self.source()))
    }
}
