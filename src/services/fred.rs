//! FRED VIXCLS series

use async_trait::async_trait;
use reqwest::Client;

use crate::models::VolatilityPoint;
use crate::services::csv::parse_vix;
use crate::services::error::ProviderError;
use crate::services::http::{build_client, fetch_text, RetryPolicy};
use crate::services::market_data::{DataSource, VolatilityProvider};

pub const VIX_SERIES_ID: &str = "VIXCLS";

pub struct FredProvider {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl FredProvider {
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

    pub fn url(&self) -> String {
        format!("{}/graph/fredgraph.csv?id={}", self.base_url, VIX_SERIES_ID)
    }
}

impl DataSource for FredProvider {
    fn name(&self) -> &str {
        "fred"
    }
}

#[async_trait]
impl VolatilityProvider for FredProvider {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError> {
        let body = fetch_text(&self.client, &self.url(), &self.retry).await?;
        parse_vix(&body)
    }
}
