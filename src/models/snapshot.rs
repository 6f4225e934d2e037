use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::signal::{IndicatorSignal, Vote};

pub const EXTRA_VIX: &str = "vix";
pub const EXTRA_RSP_SPY: &str = "rsp_spy";

/// Result of one engine invocation.
///
/// `extras` is a sorted map so that two snapshots built from the same inputs
/// serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub as_of: String,
    pub score: u8,
    pub label: Vote,
    pub signals: Vec<IndicatorSignal>,
    pub conflicts: Vec<String>,
    pub extras: BTreeMap<String, String>,
}

impl Snapshot {
    /// Look up a signal by name
    pub fn signal(&self, name: &str) -> Option<&IndicatorSignal> {
        self.signals.iter().find(|s| s.name == name)
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}
