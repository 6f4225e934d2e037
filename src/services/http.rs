//! Shared HTTP plumbing for the remote providers

use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::services::error::ProviderError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const MAX_RETRIES: usize = 3;

/// Backoff between attempts of one request
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            min_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// No retries at all
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_retries)
    }
}

pub fn build_client() -> Result<Client, ProviderError> {
    Ok(Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("marketpulse/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// GET `url` and return the body, retrying transient failures.
pub async fn fetch_text(
    client: &Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<String, ProviderError> {
    let fetch = || fetch_once(client, url);

    let body = fetch
        .retry(policy.backoff())
        .when(ProviderError::is_transient)
        .notify(|err: &ProviderError, delay: Duration| {
            warn!(url = %url, error = %err, delay_ms = delay.as_millis() as u64, "Retrying request");
        })
        .await?;

    debug!(url = %url, bytes = body.len(), "Fetched");
    Ok(body)
}

async fn fetch_once(client: &Client, url: &str) -> Result<String, ProviderError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}
