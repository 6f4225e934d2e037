//! Runtime around the engine: refresh loop and HTTP front end

pub mod http;
pub mod scheduler;

pub use http::*;
pub use scheduler::*;
