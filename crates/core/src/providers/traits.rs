use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::{AssetClass, NormalizedAsset};
use crate::models::price::{PriceQuote, PriceSource};

/// Trait abstraction for all price data adapters.
///
/// Each external source (CoinGecko, Alpha Vantage quote, Alpha Vantage
/// daily, Yahoo Finance) implements this trait. The resolver iterates
/// adapters in priority order until one yields a price, so adding or
/// swapping a source never touches the fallback logic.
///
/// Adapters perform at most one outbound HTTP call per `fetch` and never
/// retry internally — retry and fallback policy live in the resolver.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this adapter (for logs/errors).
    fn name(&self) -> &str;

    /// Which fallback tier this adapter represents.
    fn source(&self) -> PriceSource;

    /// Which asset classes this adapter can price.
    fn supported_asset_classes(&self) -> Vec<AssetClass>;

    /// Fetch the current USD price for a normalized asset.
    async fn fetch(&self, asset: &NormalizedAsset) -> Result<PriceQuote, CoreError>;
}

/// Shared guard for equity adapters: A-share listings are refused up front
/// so the resolver can short-circuit without burning API quota.
pub fn reject_unsupported_market(asset: &NormalizedAsset) -> Result<(), CoreError> {
    if asset.is_unsupported_market() {
        return Err(CoreError::Unsupported {
            symbol: asset.original_symbol.clone(),
            market: asset
                .exchange_suffix
                .clone()
                .unwrap_or_else(|| "unknown".into()),
        });
    }
    Ok(())
}
