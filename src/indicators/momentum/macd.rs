//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// MACD line and its signal line, both aligned with the input series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Calculate MACD over the full series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
pub fn macd(series: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema(series, fast);
    let slow_ema = ema(series, slow);

    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&line, signal);

    MacdSeries { line, signal }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn macd_default(series: &[f64]) -> MacdSeries {
    macd(series, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
