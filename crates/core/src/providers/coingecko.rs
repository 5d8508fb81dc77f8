use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::traits::PriceProvider;
use crate::errors::CoreError;
use crate::models::asset::{AssetClass, NormalizedAsset};
use crate::models::price::{PriceQuote, PriceSource};

const BASE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
const VS_CURRENCY: &str = "usd";

/// CoinGecko simple-price adapter for cryptocurrency spot prices.
///
/// - **Free**: No API key required.
/// - **Input**: lowercase CoinGecko ids ("bitcoin", "ethereum") — the
///   normalizer maps tickers to ids before this adapter is called.
/// - **Currency**: fixed to USD.
///
/// Crypto has no further fallback tier: if this adapter fails, the asset
/// goes unresolved for the cycle.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// Response shape: {"bitcoin": {"usd": 60000.0}}
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    fn source(&self) -> PriceSource {
        PriceSource::CoinGeckoSpot
    }

    fn supported_asset_classes(&self) -> Vec<AssetClass> {
        vec![AssetClass::Crypto]
    }

    async fn fetch(&self, asset: &NormalizedAsset) -> Result<PriceQuote, CoreError> {
        let response = self
            .client
            .get(BASE_URL)
            .query(&[("ids", asset.provider_id.as_str()), ("vs_currencies", VS_CURRENCY)])
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(CoreError::RateLimited {
                provider: "CoinGecko".into(),
                message: "HTTP 429 from simple/price".into(),
            });
        }

        let payload: SimplePriceResponse =
            response.json().await.map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse response for {}: {e}", asset.provider_id),
            })?;

        // An unknown id comes back as an empty object, not an HTTP error.
        let price_usd = payload
            .get(&asset.provider_id)
            .and_then(|prices| prices.get(VS_CURRENCY))
            .copied()
            .ok_or_else(|| CoreError::NotFound {
                provider: "CoinGecko".into(),
                symbol: asset.original_symbol.clone(),
            })?;

        Ok(PriceQuote::now(&asset.provider_id, price_usd, self.source()))
    }
}
