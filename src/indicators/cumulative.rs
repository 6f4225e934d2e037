//! Running totals

/// Running cumulative sum: `out[i] = series[0] + ... + series[i]`
pub fn cumulative(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |total, &value| {
            *total += value;
            Some(*total)
        })
        .collect()
}
