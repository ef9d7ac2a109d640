//! Momentum and average-range helpers for the companion chart.

/// Net change over the trailing `lookback` points. Zero while the series is
/// shorter than the lookback.
pub fn momentum(values: &[f64], lookback: usize) -> f64 {
    if lookback == 0 || values.len() < lookback {
        return 0.0;
    }
    let window = &values[values.len() - lookback..];
    window[window.len() - 1] - window[0]
}

/// Average spread of the trailing `lookback` points, floored at 0.01 so the
/// renderer always has a usable scale. Fewer than two points yield the floor.
pub fn average_range(values: &[f64], lookback: usize) -> f64 {
    if values.len() < 2 {
        return 0.01;
    }
    let window = &values[values.len() - values.len().min(lookback)..];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in window {
        min = min.min(value);
        max = max.max(value);
    }
    ((max - min) / window.len() as f64).max(0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_is_last_minus_first() {
        assert_eq!(momentum(&[5.0, 1.0, 2.0, 4.0], 3), 3.0);
    }

    #[test]
    fn test_momentum_short_series_is_zero() {
        assert_eq!(momentum(&[1.0, 2.0], 3), 0.0);
    }

    #[test]
    fn test_momentum_can_be_negative() {
        assert_eq!(momentum(&[4.0, 3.0, 1.0], 3), -3.0);
    }

    #[test]
    fn test_average_range_over_window() {
        // spread 2.0 over 3 points
        let range = average_range(&[1.0, 3.0, 2.0], 10);
        assert!((range - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_range_floor() {
        assert_eq!(average_range(&[1.0], 10), 0.01);
        assert_eq!(average_range(&[], 10), 0.01);
        assert_eq!(average_range(&[1.0, 1.0, 1.0], 10), 0.01);
    }
}
