//! Shared data models spanning the engine layers.

pub mod market;
pub mod signal;
pub mod snapshot;

pub use market::{Bar, BreadthPoint, Dated, MarketInputs, VolatilityPoint};
pub use signal::{IndicatorSignal, Vote};
pub use snapshot::{Snapshot, EXTRA_RSP_SPY, EXTRA_VIX};
