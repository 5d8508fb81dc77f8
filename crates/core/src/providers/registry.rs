use super::alphavantage::{AlphaVantageDailyProvider, AlphaVantageQuoteProvider};
use super::coingecko::CoinGeckoProvider;
use super::traits::PriceProvider;
use super::yahoo_finance::YahooFinanceProvider;
use crate::models::asset::AssetClass;

/// Registry of all available price adapters.
///
/// Registration order IS the fallback priority: the resolver walks the
/// adapters for an asset class in the order they were registered. New
/// adapters can be added without modifying the resolver.
pub struct PriceProviderRegistry {
    providers: Vec<Box<dyn PriceProvider>>,
}

impl PriceProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the default fallback chains pre-configured.
    ///
    /// Equity priority: realtime quote → daily close → alternate provider.
    /// Without an Alpha Vantage key only the alternate tier is available.
    pub fn new_with_defaults(alpha_vantage_key: Option<&str>) -> Self {
        let mut registry = Self::new();

        // CoinGecko — crypto spot, no API key needed
        registry.register(Box::new(CoinGeckoProvider::new()));

        // Alpha Vantage — equity realtime + daily close, requires API key
        if let Some(key) = alpha_vantage_key {
            registry.register(Box::new(AlphaVantageQuoteProvider::new(key.to_string())));
            registry.register(Box::new(AlphaVantageDailyProvider::new(key.to_string())));
        }

        // Yahoo Finance — equity alternate source, no API key needed
        if let Ok(yahoo) = YahooFinanceProvider::new() {
            registry.register(Box::new(yahoo));
        }

        registry
    }

    /// Register a new price adapter at the end of the priority order.
    pub fn register(&mut self, provider: Box<dyn PriceProvider>) {
        self.providers.push(provider);
    }

    /// Find the highest-priority adapter for the given asset class.
    pub fn get_provider_for(&self, asset_class: AssetClass) -> Option<&dyn PriceProvider> {
        self.get_providers_for(asset_class).into_iter().next()
    }

    /// Return ALL adapters for the given asset class, in priority order.
    /// The resolver walks this list until the first success.
    pub fn get_providers_for(&self, asset_class: AssetClass) -> Vec<&dyn PriceProvider> {
        self.providers
            .iter()
            .filter(|p| p.supported_asset_classes().contains(&asset_class))
            .map(|p| p.as_ref())
            .collect()
    }
}

impl Default for PriceProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
