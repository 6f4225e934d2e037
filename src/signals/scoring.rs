//! Vote aggregation into a bounded score and label

use crate::config::EngineConfig;
use crate::models::{IndicatorSignal, Vote};

/// Sum of vote weights (Bull +1, Bear -1, Neutral and N/A 0)
pub fn raw_score(signals: &[IndicatorSignal]) -> i32 {
    signals.iter().map(|s| s.vote.weight()).sum()
}

/// Map a raw score onto 0..=100.
///
/// A full bull sweep maps to 100, a full bear sweep to 0, all-neutral to 50.
/// Halves round away from zero.
pub fn normalize_score(raw: i32, count: usize) -> u8 {
    let n = count.max(1) as f64;
    let normalized = ((raw as f64 + n) / (2.0 * n) * 100.0).round();
    normalized.clamp(0.0, 100.0) as u8
}

/// Label for a normalized score
pub fn label_for_score(score: u8, config: &EngineConfig) -> Vote {
    if score >= config.score_bull {
        Vote::Bull
    } else if score >= config.score_neutral {
        Vote::Neutral
    } else {
        Vote::Bear
    }
}

/// Score and label a set of signals
pub fn score_signals(signals: &[IndicatorSignal], config: &EngineConfig) -> (u8, Vote) {
    let score = normalize_score(raw_score(signals), signals.len());
    (score, label_for_score(score, config))
}
