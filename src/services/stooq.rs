//! Stooq daily price history

use async_trait::async_trait;
use reqwest::Client;

use crate::models::Bar;
use crate::services::csv::parse_prices;
use crate::services::error::ProviderError;
use crate::services::http::{build_client, fetch_text, RetryPolicy};
use crate::services::market_data::{DataSource, PriceProvider};

pub struct StooqProvider {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl StooqProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// US listings are addressed as `<symbol>.us`
    pub fn url(&self, symbol: &str) -> String {
        format!("{}/q/d/l/?s={}.us&i=d", self.base_url, symbol.to_lowercase())
    }
}

impl DataSource for StooqProvider {
    fn name(&self) -> &str {
        "stooq"
    }
}

#[async_trait]
impl PriceProvider for StooqProvider {
    async fn fetch_daily(&self, symbol: &str) -> Result<Vec<Bar>, ProviderError> {
        let body = fetch_text(&self.client, &self.url(symbol), &self.retry).await?;
        parse_prices(&body)
    }
}
