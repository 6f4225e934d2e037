//! Concurrent loading of the engine's input series

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::models::MarketInputs;
use crate::services::error::ProviderError;
use crate::services::fred::FredProvider;
use crate::services::local::LocalCsvProvider;
use crate::services::market_data::{
    BreadthProvider, PriceProvider, ProviderChain, VolatilityProvider,
};
use crate::services::stooq::StooqProvider;

/// Fetches index, proxy, VIX and breadth series concurrently.
///
/// Index, proxy and VIX are required: if any fails the whole load fails and
/// no snapshot should be built. Breadth is optional and degrades to `None`.
pub struct DataLoader {
    index_symbol: String,
    proxy_symbol: String,
    prices: Arc<dyn PriceProvider>,
    volatility: Arc<dyn VolatilityProvider>,
    breadth: Arc<dyn BreadthProvider>,
}

impl DataLoader {
    pub fn new(
        prices: Arc<dyn PriceProvider>,
        volatility: Arc<dyn VolatilityProvider>,
        breadth: Arc<dyn BreadthProvider>,
    ) -> Self {
        let defaults = ServiceConfig::default();
        Self {
            index_symbol: defaults.index_symbol,
            proxy_symbol: defaults.proxy_symbol,
            prices,
            volatility,
            breadth,
        }
    }

    pub fn with_symbols(mut self, index: impl Into<String>, proxy: impl Into<String>) -> Self {
        self.index_symbol = index.into();
        self.proxy_symbol = proxy.into();
        self
    }

    /// Default provider chains: local CSV first (when allowed), then Stooq for
    /// prices and FRED for VIX. Breadth only comes from local files.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ProviderError> {
        let local = Arc::new(LocalCsvProvider::new(&config.data_dir));

        let mut prices: ProviderChain<dyn PriceProvider> = ProviderChain::new("Market data");
        let mut volatility: ProviderChain<dyn VolatilityProvider> = ProviderChain::new("VIX data");
        let mut breadth: ProviderChain<dyn BreadthProvider> = ProviderChain::new("Breadth data");

        if config.allow_local {
            prices = prices.with_provider(local.clone());
            volatility = volatility.with_provider(local.clone());
            breadth = breadth.with_provider(local);
        }
        prices = prices.with_provider(Arc::new(StooqProvider::new(&config.stooq_url)?));
        volatility = volatility.with_provider(Arc::new(FredProvider::new(&config.fred_url)?));

        Ok(Self::new(Arc::new(prices), Arc::new(volatility), Arc::new(breadth))
            .with_symbols(&config.index_symbol, &config.proxy_symbol))
    }

    pub async fn load(&self) -> Result<MarketInputs, ProviderError> {
        let (index, proxy, volatility, breadth) = tokio::join!(
            self.prices.fetch_daily(&self.index_symbol),
            self.prices.fetch_daily(&self.proxy_symbol),
            self.volatility.fetch_daily(),
            self.breadth.fetch_daily(),
        );

        let mut inputs = MarketInputs::new(index?, proxy?, volatility?);
        match breadth {
            Ok(points) if !points.is_empty() => inputs = inputs.with_breadth(points),
            Ok(_) => warn!("Breadth source returned no rows, breadth signals unavailable"),
            Err(e) => warn!(error = %e, "Breadth unavailable"),
        }

        info!(
            index = inputs.index.len(),
            proxy = inputs.proxy.len(),
            vix = inputs.volatility.len(),
            breadth = inputs.breadth().map_or(0, |b| b.len()),
            "DataLoader: inputs loaded"
        );
        Ok(inputs)
    }
}
