use serde::{Deserialize, Serialize};
use std::fmt;

/// A single indicator's verdict on the market regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    #[serde(rename = "BULL")]
    Bull,
    #[serde(rename = "BEAR")]
    Bear,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Vote {
    /// Contribution of this vote to the raw score
    pub fn weight(&self) -> i32 {
        match self {
            Vote::Bull => 1,
            Vote::Bear => -1,
            Vote::Neutral => 0,
            Vote::NotAvailable => 0,
        }
    }

    /// Bull when `condition` holds, Bear otherwise
    pub fn from_condition(condition: bool) -> Self {
        if condition {
            Vote::Bull
        } else {
            Vote::Bear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Bull => "BULL",
            Vote::Bear => "BEAR",
            Vote::Neutral => "NEUTRAL",
            Vote::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named vote with the formatted numbers that justified it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSignal {
    pub name: String,
    pub vote: Vote,
    pub detail: String,
}

impl IndicatorSignal {
    pub fn new(name: impl Into<String>, vote: Vote, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vote,
            detail: detail.into(),
        }
    }

    /// Placeholder used when the inputs for this signal were not supplied
    pub fn unavailable(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Vote::NotAvailable, detail)
    }
}
