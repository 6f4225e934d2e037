//! Unit tests for trend/breadth conflict detection

use marketpulse::models::{IndicatorSignal, Vote};
use marketpulse::signals::conflicts::{TREND_BEAR_BREADTH_STRONG, TREND_BULL_BREADTH_WEAK};
use marketpulse::signals::{detect_conflicts, SIGNAL_NAMES};

fn with_votes(votes: [Vote; 8]) -> Vec<IndicatorSignal> {
    SIGNAL_NAMES
        .iter()
        .zip(votes)
        .map(|(name, vote)| IndicatorSignal::new(*name, vote, ""))
        .collect()
}

#[test]
fn test_bullish_trend_weak_breadth() {
    use Vote::*;
    let signals = with_votes([Bull, Bull, Bull, Bull, Bear, Bull, Bull, Bull]);
    assert_eq!(detect_conflicts(&signals), vec![TREND_BULL_BREADTH_WEAK.to_string()]);
}

#[test]
fn test_bearish_trend_improving_breadth() {
    use Vote::*;
    let signals = with_votes([Bear, Bear, Bear, Bear, Bear, Bull, Bear, Bear]);
    assert_eq!(detect_conflicts(&signals), vec![TREND_BEAR_BREADTH_STRONG.to_string()]);
}

#[test]
fn test_mixed_trend_has_no_conflict() {
    use Vote::*;
    let signals = with_votes([Bull, Bear, Bull, Bear, Bear, Bear, Bull, Bull]);
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_unavailable_breadth_has_no_conflict() {
    use Vote::*;
    let signals = with_votes([
        Bull,
        Bull,
        Bull,
        NotAvailable,
        NotAvailable,
        NotAvailable,
        Bull,
        Bull,
    ]);
    assert!(detect_conflicts(&signals).is_empty());
}

#[test]
fn test_no_breadth_signals_at_all() {
    let signals = vec![IndicatorSignal::new("Weekly MACD", Vote::Bull, "")];
    assert!(detect_conflicts(&signals).is_empty());
}
