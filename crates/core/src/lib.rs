pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod symbols;

use errors::CoreError;
use models::asset::{Holding, NormalizedAsset};
use models::price::ResolvedPrice;
use models::report::ReportTable;
use providers::registry::PriceProviderRegistry;
use services::resolver::PriceResolver;
use services::valuation::PortfolioValuator;

/// Main entry point for the VaultChain Tracker core library.
///
/// Wires the default provider registry into a resolver and valuator.
/// Holds configuration only (API key, adapter chain) — no portfolio state
/// survives between valuation passes; each watch cycle re-resolves fully.
#[must_use]
pub struct VaultChainTracker {
    resolver: PriceResolver,
    valuator: PortfolioValuator,
}

impl VaultChainTracker {
    /// Build a tracker with the default fallback chains. The Alpha Vantage
    /// key is optional; without it equity pricing falls straight through to
    /// the alternate provider.
    pub fn new(alpha_vantage_key: Option<&str>) -> Self {
        let registry = PriceProviderRegistry::new_with_defaults(alpha_vantage_key);
        Self::with_registry(registry)
    }

    /// Build a tracker around a custom adapter registry (used by tests and
    /// by anyone wiring their own sources).
    pub fn with_registry(registry: PriceProviderRegistry) -> Self {
        Self {
            resolver: PriceResolver::new(registry),
            valuator: PortfolioValuator::new(),
        }
    }

    /// Normalize a raw symbol without touching the network.
    #[must_use]
    pub fn normalize(&self, raw_symbol: &str) -> NormalizedAsset {
        symbols::normalize(raw_symbol)
    }

    /// Resolve the current USD price for one asset through the fallback chain.
    pub async fn resolve_asset(&self, asset: &NormalizedAsset) -> Result<ResolvedPrice, CoreError> {
        self.resolver.resolve(asset).await
    }

    /// Value a full set of holdings. Per-asset failures become unresolved
    /// rows; the call itself does not fail.
    pub async fn value_portfolio(&self, holdings: &[Holding]) -> ReportTable {
        self.valuator.value(holdings, &self.resolver).await
    }

    /// Whether any adapter exists for the given asset's class.
    #[must_use]
    pub fn is_provider_available(&self, asset: &NormalizedAsset) -> bool {
        self.resolver.has_provider_for(asset)
    }

    /// Adapter names that would be tried for this asset, in fallback order.
    #[must_use]
    pub fn provider_names(&self, asset: &NormalizedAsset) -> Vec<String> {
        self.resolver.provider_names(asset)
    }
}
