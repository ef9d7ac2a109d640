//! Trend classification from the fast/slow EMA pair.

use crate::types::Trend;

/// Classify the trend from the latest fast and slow EMA values.
///
/// Neutral until the series reaches the slow period and both EMAs are
/// defined. Beyond that, the fast EMA must clear the slow one by `tolerance`
/// in either direction; anything inside the band is lateral.
pub fn classify_trend(
    last_fast: Option<f64>,
    last_slow: Option<f64>,
    data_len: usize,
    slow_period: usize,
    tolerance: f64,
) -> Trend {
    if data_len < slow_period {
        return Trend::Neutral;
    }
    let (fast, slow) = match (last_fast, last_slow) {
        (Some(fast), Some(slow)) => (fast, slow),
        _ => return Trend::Neutral,
    };

    if fast > slow + tolerance {
        Trend::Bullish
    } else if fast < slow - tolerance {
        Trend::Bearish
    } else {
        Trend::Lateral
    }
}
