//! Local CSV files in a data directory

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::{Bar, BreadthPoint, VolatilityPoint};
use crate::services::csv::{parse_breadth, parse_prices, parse_vix};
use crate::services::error::ProviderError;
use crate::services::market_data::{BreadthProvider, DataSource, PriceProvider, VolatilityProvider};

pub const VIX_FILE: &str = "VIX.csv";
pub const BREADTH_FILE: &str = "breadth.csv";

/// Reads `<SYMBOL>.csv`, `VIX.csv` and `breadth.csv` from `data_dir`.
#[derive(Debug, Clone)]
pub struct LocalCsvProvider {
    data_dir: PathBuf,
}

impl LocalCsvProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn price_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", symbol.to_uppercase()))
    }

    async fn read(&self, path: PathBuf) -> Result<String, ProviderError> {
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ProviderError::MissingFile { path }),
            Err(e) => Err(e.into()),
        }
    }
}

impl DataSource for LocalCsvProvider {
    fn name(&self) -> &str {
        "local-csv"
    }
}

#[async_trait]
impl PriceProvider for LocalCsvProvider {
    async fn fetch_daily(&self, symbol: &str) -> Result<Vec<Bar>, ProviderError> {
        let content = self.read(self.price_path(symbol)).await?;
        parse_prices(&content)
    }
}

#[async_trait]
impl VolatilityProvider for LocalCsvProvider {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError> {
        let content = self.read(self.data_dir.join(VIX_FILE)).await?;
        parse_vix(&content)
    }
}

#[async_trait]
impl BreadthProvider for LocalCsvProvider {
    async fn fetch_daily(&self) -> Result<Vec<BreadthPoint>, ProviderError> {
        let content = self.read(self.data_dir.join(BREADTH_FILE)).await?;
        parse_breadth(&content)
    }
}
