//! Deterministic analytics core for an interactive candlestick chart pair.
//!
//! The engine owns a user-driven cumulative series, derives synthetic candles
//! from it, computes fast/slow EMAs, detects swing-point support/resistance,
//! classifies the trend, and runs a manual trading-signal heuristic with
//! session hit/miss statistics. A miniature companion chart runs the same
//! pipeline with its own parameters and stays synchronized with the primary.
//!
//! Rendering lives elsewhere: after each mutation the view layer pulls
//! read-only snapshots and queries, never reaching into the engine state.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::ChartConfig;
pub use error::{EngineError, Result};
pub use services::{ChartPair, ChartSession};
