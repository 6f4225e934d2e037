//! Plain-text rendering of a snapshot for terminals and chat messages.

use crate::models::{Snapshot, EXTRA_RSP_SPY, EXTRA_VIX};

pub fn summary_text(snapshot: &Snapshot) -> String {
    let mut lines = vec![
        format!(
            "Market Pulse {} ({}/100) as of {}",
            snapshot.label, snapshot.score, snapshot.as_of
        ),
        format!(
            "VIX: {} | RSP/SPY: {}",
            snapshot.extra(EXTRA_VIX).unwrap_or("N/A"),
            snapshot.extra(EXTRA_RSP_SPY).unwrap_or("N/A")
        ),
        String::new(),
        "Signals:".to_string(),
    ];

    for signal in &snapshot.signals {
        lines.push(format!("- {}: {} ({})", signal.name, signal.vote, signal.detail));
    }

    if !snapshot.conflicts.is_empty() {
        lines.push(String::new());
        lines.push("Conflicts:".to_string());
        for conflict in &snapshot.conflicts {
            lines.push(format!("- {}", conflict));
        }
    }

    lines.join("\n")
}
