use async_trait::async_trait;

use super::traits::{reject_unsupported_market, PriceProvider};
use crate::errors::CoreError;
use crate::models::asset::{AssetClass, NormalizedAsset};
use crate::models::price::{PriceQuote, PriceSource};

/// Yahoo Finance adapter — the alternate equity tier, used only when both
/// Alpha Vantage tiers fail (or no Alpha Vantage key is configured).
///
/// - **Free**: No API key required (unofficial public API).
/// - **Coverage**: Global equities and ETFs, including suffix-normalized
///   symbols like `0700.HK` and `RIO.L`.
///
/// Uses the `yahoo_finance_api` crate. A non-positive close is treated as
/// `NotFound`, consistent with the empty-quote handling upstream.
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to create connector: {e}"),
        })?;
        Ok(Self { connector })
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    fn source(&self) -> PriceSource {
        PriceSource::AlternateProvider
    }

    fn supported_asset_classes(&self) -> Vec<AssetClass> {
        vec![AssetClass::Equity]
    }

    async fn fetch(&self, asset: &NormalizedAsset) -> Result<PriceQuote, CoreError> {
        reject_unsupported_market(asset)?;

        let resp = self
            .connector
            .get_latest_quotes(&asset.provider_id, "1d")
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch latest quote for {}: {e}", asset.provider_id),
            })?;

        let quote = resp.last_quote().map_err(|_| CoreError::NotFound {
            provider: "Yahoo Finance".into(),
            symbol: asset.original_symbol.clone(),
        })?;

        if !quote.close.is_finite() || quote.close <= 0.0 {
            return Err(CoreError::NotFound {
                provider: "Yahoo Finance".into(),
                symbol: asset.original_symbol.clone(),
            });
        }

        Ok(PriceQuote::now(&asset.provider_id, quote.close, self.source()))
    }
}
