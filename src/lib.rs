//! Market regime scoring.
//!
//! The core is a pure pipeline: [`indicators`] provides the numeric
//! transforms, [`series`] resamples and aligns dated series, and
//! [`signals::SnapshotEngine`] turns index, proxy, VIX and optional breadth
//! series into a 0-100 score with a bull/neutral/bear label.
//!
//! Everything else ([`services`], [`core`]) is I/O around that pipeline.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod series;
pub mod services;
pub mod signals;
pub mod summary;

pub use models::{Bar, BreadthPoint, IndicatorSignal, MarketInputs, Snapshot, VolatilityPoint, Vote};
pub use signals::SnapshotEngine;
