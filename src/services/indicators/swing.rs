//! Swing-point detection and support/resistance selection.

use crate::config::LevelConfig;
use crate::types::{Level, SwingPoint};

/// Detect swing lows and highs over the trailing `lookback` window.
///
/// A point is a swing low (high) when no neighbor within `lookback` positions
/// on either side, clamped to the window, is lower (higher). To filter flat
/// runs, the point must also clear both immediate neighbors by `tolerance`;
/// an index at either end of the series passes the missing side for free.
pub fn find_swing_points(
    values: &[f64],
    lookback: usize,
    tolerance: f64,
) -> (Vec<SwingPoint>, Vec<SwingPoint>) {
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    if values.is_empty() {
        return (lows, highs);
    }

    let len = values.len();
    let start = len.saturating_sub(lookback);

    for i in start..len {
        let window_start = i.saturating_sub(lookback).max(start);
        let window_end = (i + lookback).min(len - 1);
        let window = &values[window_start..=window_end];

        let is_low = window
            .iter()
            .enumerate()
            .all(|(offset, &v)| window_start + offset == i || values[i] <= v);
        let is_high = window
            .iter()
            .enumerate()
            .all(|(offset, &v)| window_start + offset == i || values[i] >= v);

        let distinct_low = (i == 0 || values[i] < values[i - 1] - tolerance)
            && (i == len - 1 || values[i] < values[i + 1] - tolerance);
        let distinct_high = (i == 0 || values[i] > values[i - 1] + tolerance)
            && (i == len - 1 || values[i] > values[i + 1] + tolerance);

        if is_low && distinct_low {
            lows.push(SwingPoint {
                index: i,
                value: values[i],
            });
        }
        if is_high && distinct_high {
            highs.push(SwingPoint {
                index: i,
                value: values[i],
            });
        }
    }
    (lows, highs)
}

/// Pick at most one support and one resistance level: the most recent swing
/// on each side. Series shorter than `min_points` report nothing.
pub fn support_resistance(values: &[f64], config: &LevelConfig) -> (Option<Level>, Option<Level>) {
    if values.len() < config.min_points {
        return (None, None);
    }
    let lookback = values.len().min(config.max_lookback);
    let (lows, highs) = find_swing_points(values, lookback, config.swing_tolerance);

    // Swings come back in index order, so the last one is the most recent.
    let support = lows.last().map(|&swing| Level::support(swing));
    let resistance = highs.last().map(|&swing| Level::resistance(swing));
    (support, resistance)
}
