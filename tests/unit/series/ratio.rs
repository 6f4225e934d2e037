//! Unit tests for date-aligned ratios

use crate::fixtures::date;
use marketpulse::models::Bar;
use marketpulse::series::{change, last_or_zero, ratio_series};

#[test]
fn test_ratio_drops_unmatched_dates() {
    let a = vec![Bar::new(date(2024, 1, 1), 10.0), Bar::new(date(2024, 1, 2), 20.0)];
    let b = vec![Bar::new(date(2024, 1, 1), 5.0), Bar::new(date(2024, 1, 3), 1.0)];

    assert_eq!(ratio_series(&a, &b), vec![Bar::new(date(2024, 1, 1), 2.0)]);
}

#[test]
fn test_ratio_aligned_series() {
    let a = vec![
        Bar::new(date(2024, 1, 1), 2.0),
        Bar::new(date(2024, 1, 2), 4.0),
        Bar::new(date(2024, 1, 3), 6.0),
    ];
    let b = vec![
        Bar::new(date(2024, 1, 1), 1.0),
        Bar::new(date(2024, 1, 2), 2.0),
        Bar::new(date(2024, 1, 3), 3.0),
    ];
    let closes: Vec<f64> = ratio_series(&a, &b).iter().map(|r| r.close).collect();
    assert_eq!(closes, vec![2.0, 2.0, 2.0]);
}

#[test]
fn test_ratio_no_overlap() {
    let a = vec![Bar::new(date(2024, 1, 1), 2.0)];
    let b = vec![Bar::new(date(2024, 1, 2), 1.0)];
    assert!(ratio_series(&a, &b).is_empty());
}

#[test]
fn test_ratio_zero_denominator_not_guarded() {
    let a = vec![Bar::new(date(2024, 1, 1), 2.0)];
    let b = vec![Bar::new(date(2024, 1, 1), 0.0)];
    assert!(ratio_series(&a, &b)[0].close.is_infinite());
}

#[test]
fn test_change_and_last() {
    let series = [1.0, 4.0, 9.0];
    assert_eq!(change(&series, 1), Some(5.0));
    assert_eq!(change(&series, 2), Some(8.0));
    assert_eq!(change(&series, 3), None);
    assert_eq!(change(&[], 1), None);
    assert_eq!(last_or_zero(&series), 9.0);
    assert_eq!(last_or_zero(&[]), 0.0);
}
