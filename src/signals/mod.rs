//! Rule-based votes, their aggregation and the snapshot engine.

pub mod breadth;
pub mod categories;
pub mod conflicts;
pub mod engine;
pub mod participation;
pub mod scoring;
pub mod trend;
pub mod volatility;

pub use categories::*;
pub use conflicts::detect_conflicts;
pub use engine::SnapshotEngine;
pub use scoring::{label_for_score, normalize_score, raw_score, score_signals};
