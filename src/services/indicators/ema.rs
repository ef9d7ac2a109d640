//! Exponential moving average over the cumulative series.

/// Compute an EMA sequence the same length as the input.
///
/// Positions before `period - 1` are `None`. The value at `period - 1` is the
/// simple average of the first `period` inputs, and every later value blends
/// the input with the previous EMA using the standard `2 / (period + 1)`
/// multiplier. Inputs shorter than the period yield an all-`None` sequence,
/// as does a zero period.
pub fn compute_ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || values.len() < period {
        return vec![None; values.len()];
    }

    let mut out: Vec<Option<f64>> = vec![None; period - 1];
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    out.push(Some(seed));

    let k = 2.0 / (period as f64 + 1.0);
    let mut prev = seed;
    for &value in &values[period..] {
        prev = value * k + prev * (1.0 - k);
        out.push(Some(prev));
    }
    out
}

/// Latest defined value of an EMA sequence.
pub fn last_defined(sequence: &[Option<f64>]) -> Option<f64> {
    sequence.iter().rev().find_map(|v| *v)
}
