//! Runtime configuration.
//!
//! Values come from the environment (optionally seeded from `.env` by the
//! binaries via `dotenvy`). Anything missing or unparsable falls back to the
//! default.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_STOOQ_URL: &str = "https://stooq.com";
pub const DEFAULT_FRED_URL: &str = "https://fred.stlouisfed.org";

/// Current deployment environment (`APP_ENV`, then `ENVIRONMENT`), lowercased.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => match v.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Thresholds used by the snapshot engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// VIX strictly below this is bullish
    pub vix_bull: f64,
    /// VIX at or below this (and not bullish) is neutral, above is bearish
    pub vix_neutral: f64,
    /// Normalized score at or above this is labelled bullish
    pub score_bull: u8,
    /// Normalized score at or above this (and below `score_bull`) is neutral
    pub score_neutral: u8,
    /// Populate `Snapshot::conflicts` with trend/breadth disagreements
    pub detect_conflicts: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vix_bull: 20.0,
            vix_neutral: 25.0,
            score_bull: 60,
            score_neutral: 40,
            detect_conflicts: false,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            vix_bull: env_or("MARKETPULSE_VIX_BULL", defaults.vix_bull),
            vix_neutral: env_or("MARKETPULSE_VIX_NEUTRAL", defaults.vix_neutral),
            score_bull: env_or("MARKETPULSE_SCORE_BULL", defaults.score_bull),
            score_neutral: env_or("MARKETPULSE_SCORE_NEUTRAL", defaults.score_neutral),
            detect_conflicts: env_flag("MARKETPULSE_DETECT_CONFLICTS", defaults.detect_conflicts),
        }
    }

    pub fn with_conflicts(mut self) -> Self {
        self.detect_conflicts = true;
        self
    }
}

/// Settings for the data loaders, refresh loop and HTTP front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    /// Try `data_dir` CSV files before the remote sources
    pub allow_local: bool,
    pub refresh_seconds: u64,
    pub port: u16,
    pub index_symbol: String,
    pub proxy_symbol: String,
    pub stooq_url: String,
    pub fred_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            allow_local: true,
            refresh_seconds: 300,
            port: 8080,
            index_symbol: "SPY".to_string(),
            proxy_symbol: "RSP".to_string(),
            stooq_url: DEFAULT_STOOQ_URL.to_string(),
            fred_url: DEFAULT_FRED_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("MARKETPULSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            allow_local: env_flag("MARKETPULSE_ALLOW_LOCAL", defaults.allow_local),
            refresh_seconds: env_or("MARKETPULSE_REFRESH_SECONDS", defaults.refresh_seconds),
            port: env_or("PORT", defaults.port),
            index_symbol: defaults.index_symbol,
            proxy_symbol: defaults.proxy_symbol,
            stooq_url: env::var("MARKETPULSE_STOOQ_URL").unwrap_or(defaults.stooq_url),
            fred_url: env::var("MARKETPULSE_FRED_URL").unwrap_or(defaults.fred_url),
        }
    }
}

/// `~/.marketpulse/data`
pub fn default_data_dir() -> PathBuf {
    let home = env::var("HOME").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."));
    home.join(".marketpulse").join("data")
}
