//! Data provider interfaces and provider chains.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{Bar, BreadthPoint, VolatilityPoint};
use crate::services::error::ProviderError;

/// Common identity for every data source, used in logs and chain errors.
pub trait DataSource: Send + Sync {
    fn name(&self) -> &str;
}

#[async_trait]
pub trait PriceProvider: DataSource {
    /// Daily closes for `symbol`, ascending by date
    async fn fetch_daily(&self, symbol: &str) -> Result<Vec<Bar>, ProviderError>;
}

#[async_trait]
pub trait VolatilityProvider: DataSource {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError>;
}

#[async_trait]
pub trait BreadthProvider: DataSource {
    async fn fetch_daily(&self) -> Result<Vec<BreadthPoint>, ProviderError>;
}

/// Ordered fallback list of providers.
///
/// The first provider returning a non-empty series wins. If none does the
/// chain fails with every individual failure listed.
pub struct ProviderChain<P: ?Sized> {
    label: String,
    providers: Vec<Arc<P>>,
}

impl<P: ?Sized> ProviderChain<P> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            providers: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<P>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

struct ChainErrors<'a> {
    label: &'a str,
    errors: Vec<String>,
}

impl<'a> ChainErrors<'a> {
    fn new(label: &'a str) -> Self {
        Self {
            label,
            errors: Vec::new(),
        }
    }

    fn record(&mut self, provider: &str, error: impl std::fmt::Display) {
        warn!(chain = %self.label, provider = %provider, error = %error, "Provider failed, trying next");
        self.errors.push(format!("{}: {}", provider, error));
    }

    fn into_error(self) -> ProviderError {
        let errors = if self.errors.is_empty() {
            vec!["no data returned".to_string()]
        } else {
            self.errors
        };
        ProviderError::Chain {
            label: self.label.to_string(),
            errors,
        }
    }
}

impl<P: ?Sized> DataSource for ProviderChain<P>
where
    P: Send + Sync,
{
    fn name(&self) -> &str {
        &self.label
    }
}

#[async_trait]
impl PriceProvider for ProviderChain<dyn PriceProvider> {
    async fn fetch_daily(&self, symbol: &str) -> Result<Vec<Bar>, ProviderError> {
        let mut errors = ChainErrors::new(&self.label);
        for provider in &self.providers {
            match provider.fetch_daily(symbol).await {
                Ok(bars) if !bars.is_empty() => {
                    debug!(provider = %provider.name(), symbol = %symbol, count = bars.len(), "Loaded prices");
                    return Ok(bars);
                }
                Ok(_) => errors.record(provider.name(), "no data returned"),
                Err(e) => errors.record(provider.name(), e),
            }
        }
        Err(errors.into_error())
    }
}

#[async_trait]
impl VolatilityProvider for ProviderChain<dyn VolatilityProvider> {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError> {
        let mut errors = ChainErrors::new(&self.label);
        for provider in &self.providers {
            match provider.fetch_daily().await {
                Ok(points) if !points.is_empty() => {
                    debug!(provider = %provider.name(), count = points.len(), "Loaded VIX");
                    return Ok(points);
                }
                Ok(_) => errors.record(provider.name(), "no data returned"),
                Err(e) => errors.record(provider.name(), e),
            }
        }
        Err(errors.into_error())
    }
}

#[async_trait]
impl BreadthProvider for ProviderChain<dyn BreadthProvider> {
    async fn fetch_daily(&self) -> Result<Vec<BreadthPoint>, ProviderError> {
        let mut errors = ChainErrors::new(&self.label);
        for provider in &self.providers {
            match provider.fetch_daily().await {
                Ok(points) if !points.is_empty() => {
                    debug!(provider = %provider.name(), count = points.len(), "Loaded breadth");
                    return Ok(points);
                }
                Ok(_) => errors.record(provider.name(), "no data returned"),
                Err(e) => errors.record(provider.name(), e),
            }
        }
        Err(errors.into_error())
    }
}
