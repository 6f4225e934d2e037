//! SMA (Simple Moving Average) indicator

/// Trailing simple moving average.
///
/// Output has the same length as the input. Near the start the window shrinks,
/// so index `i < window - 1` averages the first `i + 1` values.
/// A zero window returns the series unchanged.
pub fn sma(series: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return series.to_vec();
    }

    (0..series.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &series[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
