//! Equal-weight vs cap-weight participation signal

use crate::indicators::sma;
use crate::models::{IndicatorSignal, Vote};
use crate::series::{change, last_or_zero};
use crate::signals::categories::RSP_SPY_BREADTH;

pub const RATIO_SMA_WINDOW: usize = 50;

/// Bull only when the daily proxy/index ratio is above its 50-day SMA
/// and also rose on the last day.
pub fn relative_breadth(ratio: &[f64]) -> IndicatorSignal {
    let last = last_or_zero(ratio);
    let average = last_or_zero(&sma(ratio, RATIO_SMA_WINDOW));
    let slope = change(ratio, 1).unwrap_or(0.0);

    IndicatorSignal::new(
        RSP_SPY_BREADTH,
        Vote::from_condition(last > average && slope > 0.0),
        format!("Ratio {:.4} vs SMA {:.4}", last, average),
    )
}
