use std::path::PathBuf;
use thiserror::Error;

/// Failures while obtaining input series. These never reach the engine:
/// a failed load means no snapshot is produced.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("missing local CSV: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{provider} returned no data")]
    Empty { provider: String },

    #[error("{label} failed: {}", errors.join("; "))]
    Chain { label: String, errors: Vec<String> },
}

impl ProviderError {
    /// Worth retrying: connection problems, rate limits and server errors
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
