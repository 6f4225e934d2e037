//! EMA (Exponential Moving Average) indicator

/// Smoothing factor for a given span: `2 / (span + 1)`
pub fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Exponential moving average seeded with the first value.
///
/// `out[0] = series[0]`, then `out[i] = a * series[i] + (1 - a) * out[i - 1]`.
/// Empty input gives empty output.
pub fn ema(series: &[f64], span: usize) -> Vec<f64> {
    let Some(&seed) = series.first() else {
        return Vec::new();
    };

    let alpha = smoothing_factor(span);
    let mut result = Vec::with_capacity(series.len());
    let mut current = seed;
    result.push(current);

    for &value in &series[1..] {
        current = alpha * value + (1.0 - alpha) * current;
        result.push(current);
    }

    result
}
