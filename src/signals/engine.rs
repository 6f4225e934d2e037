//! Snapshot engine: turns the input series into a scored, labelled snapshot.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    Bar, BreadthPoint, IndicatorSignal, MarketInputs, Snapshot, VolatilityPoint, EXTRA_RSP_SPY,
    EXTRA_VIX,
};
use crate::series::{closes, last_or_zero, ratio_series, weekly_series};
use crate::signals::breadth::breadth_signals;
use crate::signals::conflicts::detect_conflicts;
use crate::signals::participation::relative_breadth;
use crate::signals::scoring::score_signals;
use crate::signals::trend::{weekly_ema_slope, weekly_ma_cross, weekly_macd};
use crate::signals::volatility::{latest_vix, vix_regime};

pub const AS_OF_FORMAT: &str = "%Y-%m-%d";

/// Stateless, synchronous snapshot builder.
///
/// Never fails: missing data degrades to 0, Bear or `NotAvailable` votes.
/// Safe to share across threads and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct SnapshotEngine {
    config: EngineConfig,
}

impl SnapshotEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, inputs: &MarketInputs) -> Snapshot {
        self.build_snapshot(
            &inputs.index,
            &inputs.proxy,
            &inputs.volatility,
            inputs.breadth(),
        )
    }

    /// Build one snapshot from sorted, deduplicated daily series.
    pub fn build_snapshot(
        &self,
        index: &[Bar],
        proxy: &[Bar],
        volatility: &[VolatilityPoint],
        breadth: Option<&[BreadthPoint]>,
    ) -> Snapshot {
        let ratio = closes(&ratio_series(proxy, index));
        let signals = self.build_signals(index, &ratio, volatility, breadth);
        let (score, label) = score_signals(&signals, &self.config);

        let conflicts = if self.config.detect_conflicts {
            detect_conflicts(&signals)
        } else {
            Vec::new()
        };

        let mut extras = BTreeMap::new();
        extras.insert(EXTRA_VIX.to_string(), format!("{:.2}", latest_vix(volatility)));
        extras.insert(EXTRA_RSP_SPY.to_string(), format!("{:.4}", last_or_zero(&ratio)));

        let as_of = as_of_date(index, volatility).format(AS_OF_FORMAT).to_string();

        debug!(
            as_of = %as_of,
            score = score,
            label = %label,
            breadth = breadth.is_some_and(|b| !b.is_empty()),
            "SnapshotEngine: built snapshot"
        );

        Snapshot {
            as_of,
            score,
            label,
            signals,
            conflicts,
            extras,
        }
    }

    fn build_signals(
        &self,
        index: &[Bar],
        ratio: &[f64],
        volatility: &[VolatilityPoint],
        breadth: Option<&[BreadthPoint]>,
    ) -> Vec<IndicatorSignal> {
        let weekly = closes(&weekly_series(index));

        let mut signals = Vec::with_capacity(8);
        signals.push(weekly_macd(&weekly));
        signals.push(weekly_ma_cross(&weekly));
        signals.push(weekly_ema_slope(&weekly));
        signals.extend(breadth_signals(breadth));
        signals.push(vix_regime(volatility, &self.config));
        signals.push(relative_breadth(ratio));
        signals
    }
}

/// Later of the last index date and the last VIX date.
///
/// Falls back to 0001-01-01 when both series are empty.
pub fn as_of_date(index: &[Bar], volatility: &[VolatilityPoint]) -> NaiveDate {
    let index_last = index.last().map(|b| b.date);
    let vix_last = volatility.last().map(|p| p.date);

    index_last
        .max(vix_last)
        .or_else(|| NaiveDate::from_ymd_opt(1, 1, 1))
        .unwrap_or_default()
}
