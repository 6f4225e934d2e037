//! Pure numeric transforms over ordered `f64` sequences.
//!
//! Every function here is total: no dates, no errors, output length equals
//! input length.

pub mod cumulative;
pub mod momentum;
pub mod trend;

pub use cumulative::cumulative;
pub use momentum::{macd, macd_default, MacdSeries};
pub use trend::{ema, sma};
