//! Serializable value types shared across the engine.

pub mod candle;
pub mod levels;
pub mod signals;
pub mod view;

pub use candle::Candle;
pub use levels::{Level, LevelKind, SwingPoint};
pub use signals::{SessionStats, SignalEvent, SignalKind, SignalStatus, Trend};
pub use view::VisibleWindow;
