//! Date-aware series transforms feeding the snapshot engine.

pub mod ratio;
pub mod resample;

pub use ratio::ratio_series;
pub use resample::{closes, weekly_series};

/// Last value, or 0 for an empty series
pub fn last_or_zero(series: &[f64]) -> f64 {
    series.last().copied().unwrap_or(0.0)
}

/// Difference between the last value and the value `lag` positions before it.
///
/// `None` when the series is too short to look back that far.
pub fn change(series: &[f64], lag: usize) -> Option<f64> {
    let last = *series.last()?;
    let earlier_idx = (series.len() - 1).checked_sub(lag)?;
    Some(last - series[earlier_idx])
}
