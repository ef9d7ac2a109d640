use serde::{Deserialize, Serialize};

/// A single synthetic candle derived from one submitted sample.
///
/// The open is the previous cumulative value (zero for the first candle) and
/// the close is the new cumulative value. Wicks are simulated from the sample
/// magnitude since there is no intra-sample range to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl Candle {
    /// Build a candle from the open/close pair and the raw increment that
    /// produced it. `wick_ratio` scales the increment magnitude into a wick
    /// margin added above the body and subtracted below it.
    pub fn from_increment(open: f64, close: f64, increment: f64, wick_ratio: f64) -> Self {
        let margin = increment.abs() * wick_ratio;
        Self {
            open,
            close,
            high: open.max(close) + margin,
            low: open.min(close) - margin,
        }
    }

    /// A flat candle counts as bullish.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Absolute body height.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}
