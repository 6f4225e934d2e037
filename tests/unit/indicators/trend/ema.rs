//! Unit tests for EMA indicator

use marketpulse::indicators::trend::{ema, smoothing_factor};

#[test]
fn test_ema_seeded_with_first_value() {
    let series = vec![42.0, 10.0, 11.0, 12.0];
    for span in [1, 3, 8, 89] {
        assert_eq!(ema(&series, span)[0], 42.0);
    }
}

#[test]
fn test_ema_recurrence() {
    // span 3 => alpha 0.5
    let result = ema(&[2.0, 4.0, 8.0], 3);
    assert_eq!(result, vec![2.0, 3.0, 5.5]);
}

#[test]
fn test_ema_span_one_tracks_input() {
    let series = vec![1.0, 5.0, -2.0];
    assert_eq!(ema(&series, 1), series);
}

#[test]
fn test_ema_empty() {
    assert!(ema(&[], 8).is_empty());
}

#[test]
fn test_ema_length_matches_input() {
    let series: Vec<f64> = (0..100).map(|i| i as f64).collect();
    assert_eq!(ema(&series, 89).len(), 100);
}

#[test]
fn test_smoothing_factor() {
    assert!((smoothing_factor(8) - 2.0 / 9.0).abs() < 1e-15);
    assert_eq!(smoothing_factor(1), 1.0);
}

#[test]
fn test_ema_lags_rising_series() {
    let series: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
    let result = ema(&series, 8);
    assert!(result[49] < series[49]);
    assert!(result[49] > result[48]);
}
