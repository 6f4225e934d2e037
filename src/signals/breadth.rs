//! Breadth-derived signals
//!
//! All three need the daily advance/decline and new high/low statistics.
//! Without them each slot is filled with a `NotAvailable` placeholder so the
//! snapshot always carries the full signal set.

use crate::indicators::{cumulative, ema, sma};
use crate::models::{BreadthPoint, IndicatorSignal, Vote};
use crate::series::{change, last_or_zero};
use crate::signals::categories::{BREADTH_UNAVAILABLE, CUM_AD_VS_EMA, NHNL_VS_MA, NYSI_SLOPE};

pub const AD_EMA_SPAN: usize = 89;
pub const NHNL_SMA_WINDOW: usize = 10;
pub const NYSI_FAST_SPAN: usize = 19;
pub const NYSI_SLOW_SPAN: usize = 39;
pub const NYSI_SLOPE_LAG: usize = 6;

/// The three breadth signals, in snapshot order
pub fn breadth_signals(breadth: Option<&[BreadthPoint]>) -> [IndicatorSignal; 3] {
    match breadth {
        Some(points) if !points.is_empty() => {
            let net_advances: Vec<f64> = points.iter().map(BreadthPoint::net_advances).collect();
            let net_new_highs: Vec<f64> = points.iter().map(BreadthPoint::net_new_highs).collect();
            [
                cumulative_ad(&net_advances),
                new_high_low(&net_new_highs),
                nysi_slope(&net_advances),
            ]
        }
        _ => [
            IndicatorSignal::unavailable(CUM_AD_VS_EMA, BREADTH_UNAVAILABLE),
            IndicatorSignal::unavailable(NHNL_VS_MA, BREADTH_UNAVAILABLE),
            IndicatorSignal::unavailable(NYSI_SLOPE, BREADTH_UNAVAILABLE),
        ],
    }
}

/// Bull when the cumulative A/D line is above its 89-day EMA
pub fn cumulative_ad(net_advances: &[f64]) -> IndicatorSignal {
    let line = cumulative(net_advances);
    let cum = last_or_zero(&line);
    let average = last_or_zero(&ema(&line, AD_EMA_SPAN));

    IndicatorSignal::new(
        CUM_AD_VS_EMA,
        Vote::from_condition(cum > average),
        format!("Cum {:.0} vs EMA {:.0}", cum, average),
    )
}

/// Bull when cumulative net new highs are above their 10-day SMA
pub fn new_high_low(net_new_highs: &[f64]) -> IndicatorSignal {
    let line = cumulative(net_new_highs);
    let cum = last_or_zero(&line);
    let average = last_or_zero(&sma(&line, NHNL_SMA_WINDOW));

    IndicatorSignal::new(
        NHNL_VS_MA,
        Vote::from_condition(cum > average),
        format!("Cum {:.0} vs MA {:.0}", cum, average),
    )
}

/// Summation index: running total of the 19/39 EMA oscillator of net advances
pub fn summation_index(net_advances: &[f64]) -> Vec<f64> {
    let fast = ema(net_advances, NYSI_FAST_SPAN);
    let slow = ema(net_advances, NYSI_SLOW_SPAN);
    let oscillator: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    cumulative(&oscillator)
}

/// Bull when the summation index rose over the last six sessions.
///
/// With fewer than seven points the latest index value stands in for the slope.
pub fn nysi_slope(net_advances: &[f64]) -> IndicatorSignal {
    let nysi = summation_index(net_advances);
    let slope = change(&nysi, NYSI_SLOPE_LAG).unwrap_or_else(|| last_or_zero(&nysi));

    IndicatorSignal::new(
        NYSI_SLOPE,
        Vote::from_condition(slope > 0.0),
        format!("Slope {:.2}", slope),
    )
}
