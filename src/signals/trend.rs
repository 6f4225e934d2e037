//! Weekly trend signals on the index

use crate::indicators::{ema, macd_default, sma};
use crate::models::{IndicatorSignal, Vote};
use crate::series::{change, last_or_zero};
use crate::signals::categories::{WEEKLY_EMA_SLOPE, WEEKLY_MACD, WEEKLY_MA_CROSS};

/// Bull when the weekly MACD line is above its signal line.
///
/// With no data both sides read 0 and the strict comparison votes Bear.
pub fn weekly_macd(weekly_closes: &[f64]) -> IndicatorSignal {
    let macd = macd_default(weekly_closes);
    let line = last_or_zero(&macd.line);
    let signal = last_or_zero(&macd.signal);

    IndicatorSignal::new(
        WEEKLY_MACD,
        Vote::from_condition(line > signal),
        format!("MACD {:.2} vs signal {:.2}", line, signal),
    )
}

/// Bull when the 8-week SMA is above the 21-week SMA
pub fn weekly_ma_cross(weekly_closes: &[f64]) -> IndicatorSignal {
    let fast = last_or_zero(&sma(weekly_closes, 8));
    let slow = last_or_zero(&sma(weekly_closes, 21));

    IndicatorSignal::new(
        WEEKLY_MA_CROSS,
        Vote::from_condition(fast > slow),
        format!("8W {:.2} vs 21W {:.2}", fast, slow),
    )
}

/// Bull when the 8-week EMA rose over the last week
pub fn weekly_ema_slope(weekly_closes: &[f64]) -> IndicatorSignal {
    let slope = change(&ema(weekly_closes, 8), 1).unwrap_or(0.0);

    IndicatorSignal::new(
        WEEKLY_EMA_SLOPE,
        Vote::from_condition(slope > 0.0),
        format!("Slope {:.2}", slope),
    )
}
