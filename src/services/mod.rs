//! Data sources that feed the engine: local CSV files, Stooq and FRED.

pub mod csv;
pub mod error;
pub mod fred;
pub mod http;
pub mod loader;
pub mod local;
pub mod market_data;
pub mod stooq;

pub use error::ProviderError;
pub use loader::DataLoader;
pub use local::LocalCsvProvider;
pub use market_data::*;
pub use stooq::StooqProvider;
pub use fred::FredProvider;
