use crate::errors::CoreError;
use crate::models::asset::NormalizedAsset;
use crate::models::price::ResolvedPrice;
use crate::providers::registry::PriceProviderRegistry;

/// Runs the fallback chain for one asset: try the registered adapters in
/// priority order and return the first acceptable price together with the
/// tier that produced it.
///
/// Policy:
/// - `Unsupported` from any tier short-circuits immediately — if the
///   market itself is unpriceable, no other source will help.
/// - The primary tier hands off only on `NotFound` or `RateLimited`;
///   anything else (network failure, malformed payload) is final.
/// - Once past the primary tier, any failure moves to the next adapter.
/// - When every tier fails, a `RateLimited` seen at any tier is reported
///   in preference to whatever the last tier returned.
/// - Returned prices must be finite and non-negative.
///
/// The resolver holds no state: nothing is cached across assets or across
/// watch cycles, so resolving the same asset twice within a cycle yields
/// an identical result.
pub struct PriceResolver {
    registry: PriceProviderRegistry,
}

impl PriceResolver {
    pub fn new(registry: PriceProviderRegistry) -> Self {
        Self { registry }
    }

    /// Check if at least one adapter is available for the asset's class.
    pub fn has_provider_for(&self, asset: &NormalizedAsset) -> bool {
        self.registry.get_provider_for(asset.asset_class).is_some()
    }

    /// Names of the adapters that would be tried for this asset, in order.
    pub fn provider_names(&self, asset: &NormalizedAsset) -> Vec<String> {
        self.registry
            .get_providers_for(asset.asset_class)
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Resolve the USD unit price for a normalized asset.
    pub async fn resolve(&self, asset: &NormalizedAsset) -> Result<ResolvedPrice, CoreError> {
        let providers = self.registry.get_providers_for(asset.asset_class);
        if providers.is_empty() {
            return Err(CoreError::NoProvider(asset.asset_class.to_string()));
        }

        // A rate limit seen anywhere in the chain must survive to the caller
        // even when a later tier fails differently, so the CLI can advise
        // waiting. It is kept apart from last_error and reported in
        // preference to it.
        let mut rate_limit = None;
        let mut last_error = None;
        for (tier, provider) in providers.iter().enumerate() {
            match provider.fetch(asset).await {
                Ok(quote) => {
                    if !quote.price_usd.is_finite() || quote.price_usd < 0.0 {
                        last_error = Some(CoreError::Api {
                            provider: provider.name().to_string(),
                            message: format!(
                                "Invalid price returned for {}: {}",
                                asset.original_symbol, quote.price_usd
                            ),
                        });
                        continue;
                    }
                    return Ok(ResolvedPrice {
                        price_usd: quote.price_usd,
                        source: quote.source,
                    });
                }
                Err(err @ CoreError::Unsupported { .. }) => {
                    // Non-retryable: stop the chain for this asset.
                    return Err(err);
                }
                Err(err) => {
                    let falls_through = tier > 0
                        || matches!(
                            err,
                            CoreError::NotFound { .. } | CoreError::RateLimited { .. }
                        );
                    if !falls_through {
                        return Err(err);
                    }
                    if err.is_rate_limited() {
                        rate_limit = Some(err);
                    } else {
                        last_error = Some(err);
                    }
                }
            }
        }

        Err(rate_limit
            .or(last_error)
            .unwrap_or_else(|| CoreError::NoProvider(asset.asset_class.to_string())))
    }
}
