//! Indicator implementations: pure functions over the cumulative series.

pub mod ema;
pub mod fibonacci;
pub mod momentum;
pub mod swing;
pub mod trend;

pub use ema::{compute_ema, last_defined};
pub use fibonacci::{golden_zone, retracement, FibLevel, FIB_RATIOS};
pub use momentum::{average_range, momentum};
pub use swing::{find_swing_points, support_resistance};
pub use trend::classify_trend;
