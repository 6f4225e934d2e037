//! Trend vs breadth disagreement detection

use crate::models::{IndicatorSignal, Vote};
use crate::signals::categories::SignalCategory;

pub const TREND_BULL_BREADTH_WEAK: &str = "Trend bullish but breadth weakening";
pub const TREND_BEAR_BREADTH_STRONG: &str = "Trend bearish but breadth improving";

/// Flag a unanimous trend read that breadth contradicts.
pub fn detect_conflicts(signals: &[IndicatorSignal]) -> Vec<String> {
    let votes_in = |category: SignalCategory| -> Vec<Vote> {
        signals
            .iter()
            .filter(|s| SignalCategory::of(&s.name) == Some(category))
            .map(|s| s.vote)
            .collect()
    };

    let trend = votes_in(SignalCategory::Trend);
    let breadth = votes_in(SignalCategory::Breadth);

    let mut conflicts = Vec::new();
    if trend.is_empty() || breadth.is_empty() {
        return conflicts;
    }

    if trend.iter().all(|v| *v == Vote::Bull) && breadth.contains(&Vote::Bear) {
        conflicts.push(TREND_BULL_BREADTH_WEAK.to_string());
    }
    if trend.iter().all(|v| *v == Vote::Bear) && breadth.contains(&Vote::Bull) {
        conflicts.push(TREND_BEAR_BREADTH_STRONG.to_string());
    }
    conflicts
}
