//! VIX regime signal

use crate::config::EngineConfig;
use crate::models::{IndicatorSignal, Vote, VolatilityPoint};
use crate::signals::categories::VIX_REGIME;

/// Latest VIX level, 0 when the series is empty
pub fn latest_vix(volatility: &[VolatilityPoint]) -> f64 {
    volatility.last().map(|p| p.value).unwrap_or(0.0)
}

/// Classify a VIX level: below `vix_bull` is Bull, up to and including
/// `vix_neutral` is Neutral, anything higher is Bear.
pub fn classify_vix(value: f64, config: &EngineConfig) -> Vote {
    if value < config.vix_bull {
        Vote::Bull
    } else if value <= config.vix_neutral {
        Vote::Neutral
    } else {
        Vote::Bear
    }
}

pub fn vix_regime(volatility: &[VolatilityPoint], config: &EngineConfig) -> IndicatorSignal {
    let value = latest_vix(volatility);
    IndicatorSignal::new(
        VIX_REGIME,
        classify_vix(value, config),
        format!("VIX {:.2}", value),
    )
}
