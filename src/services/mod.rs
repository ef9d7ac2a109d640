//! Engine services: series storage, indicators, signals, and the session
//! facade the renderer talks to.

pub mod indicators;
pub mod series;
pub mod session;
pub mod signal;

pub use series::SeriesStore;
pub use session::{ChartPair, ChartSession, ChartSnapshot, PairUpdate, SessionUpdate};
pub use signal::SignalEngine;
