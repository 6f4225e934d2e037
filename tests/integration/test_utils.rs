//! Shared fixtures: CSV files on disk and in-memory providers

use async_trait::async_trait;
use chrono::{Datelike, Duration as DateDuration, NaiveDate, Weekday};
use marketpulse::models::{Bar, BreadthPoint, VolatilityPoint};
use marketpulse::services::{
    BreadthProvider, DataLoader, DataSource, LocalCsvProvider, PriceProvider, ProviderError,
    VolatilityProvider,
};
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const DAYS: usize = 300;

fn business_days(count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut current = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    while days.len() < count {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(current);
        }
        current += DateDuration::days(1);
    }
    days
}

/// Stooq-style OHLCV file for a steadily rising instrument
pub fn price_csv(start: f64, step: f64) -> String {
    let mut out = String::from("Date,Open,High,Low,Close,Volume\n");
    for (i, day) in business_days(DAYS).iter().enumerate() {
        let close = start + step * i as f64;
        writeln!(out, "{},{:.2},{:.2},{:.2},{:.2},1000000", day, close, close, close, close)
            .expect("write to string");
    }
    out
}

/// FRED-style VIXCLS file, including a holiday marked with `.`
pub fn vix_csv(value: f64) -> String {
    let mut out = String::from("observation_date,VIXCLS\n");
    for day in business_days(DAYS) {
        writeln!(out, "{},{:.2}", day, value).expect("write to string");
    }
    out.push_str("2025-02-28,.\n");
    out
}

pub fn breadth_csv() -> String {
    let mut out = String::from("date,advances,declines,new_highs,new_lows\n");
    for (i, day) in business_days(DAYS).iter().enumerate() {
        writeln!(out, "{},{},1000,100,20", day, 1500 + 10 * i).expect("write to string");
    }
    out
}

/// Last business day covered by the fixture files
pub fn last_fixture_date() -> NaiveDate {
    *business_days(DAYS).last().expect("non-empty")
}

/// Bullish SPY, RSP, VIX and breadth files
pub fn write_bullish_data(dir: &Path, with_breadth: bool) {
    std::fs::write(dir.join("SPY.csv"), price_csv(100.0, 0.5)).expect("write SPY");
    std::fs::write(dir.join("RSP.csv"), price_csv(50.0, 0.5)).expect("write RSP");
    std::fs::write(dir.join("VIX.csv"), vix_csv(15.0)).expect("write VIX");
    if with_breadth {
        std::fs::write(dir.join("breadth.csv"), breadth_csv()).expect("write breadth");
    }
}

pub fn local_data_dir(with_breadth: bool) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write_bullish_data(dir.path(), with_breadth);
    dir
}

pub fn local_loader(dir: &Path) -> DataLoader {
    let local = Arc::new(LocalCsvProvider::new(dir));
    DataLoader::new(local.clone(), local.clone(), local)
}

/// In-memory provider for every series, optionally slow
#[derive(Default)]
pub struct StaticProvider {
    pub bars: Vec<Bar>,
    pub vix: Vec<VolatilityPoint>,
    pub breadth: Vec<BreadthPoint>,
    pub delay: Option<Duration>,
}

impl StaticProvider {
    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl DataSource for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }
}

#[async_trait]
impl PriceProvider for StaticProvider {
    async fn fetch_daily(&self, _symbol: &str) -> Result<Vec<Bar>, ProviderError> {
        self.wait().await;
        Ok(self.bars.clone())
    }
}

#[async_trait]
impl VolatilityProvider for StaticProvider {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError> {
        self.wait().await;
        Ok(self.vix.clone())
    }
}

#[async_trait]
impl BreadthProvider for StaticProvider {
    async fn fetch_daily(&self) -> Result<Vec<BreadthPoint>, ProviderError> {
        self.wait().await;
        Ok(self.breadth.clone())
    }
}

/// Provider that always fails
pub struct FailingProvider;

impl DataSource for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }
}

#[async_trait]
impl PriceProvider for FailingProvider {
    async fn fetch_daily(&self, symbol: &str) -> Result<Vec<Bar>, ProviderError> {
        Err(ProviderError::Empty {
            provider: format!("failing ({})", symbol),
        })
    }
}

#[async_trait]
impl VolatilityProvider for FailingProvider {
    async fn fetch_daily(&self) -> Result<Vec<VolatilityPoint>, ProviderError> {
        Err(ProviderError::Empty {
            provider: "failing".to_string(),
        })
    }
}
