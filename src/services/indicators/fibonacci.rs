//! Fibonacci retracement levels between two user-chosen anchors.

use serde::{Deserialize, Serialize};

/// The canonical retracement ratios, from the 0% anchor to the 100% anchor.
pub const FIB_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// One retracement level in value space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibLevel {
    pub ratio: f64,
    pub value: f64,
}

/// Project the canonical ratios between the two anchors. `full` is the 100%
/// anchor and `zero` the 0% anchor; the direction of the move falls out of
/// their ordering.
pub fn retracement(full: f64, zero: f64) -> Vec<FibLevel> {
    FIB_RATIOS
        .iter()
        .map(|&ratio| FibLevel {
            ratio,
            value: zero + (full - zero) * ratio,
        })
        .collect()
}

/// The band between the 50% and 61.8% levels, ordered low to high.
pub fn golden_zone(full: f64, zero: f64) -> (f64, f64) {
    let a = zero + (full - zero) * 0.5;
    let b = zero + (full - zero) * 0.618;
    (a.min(b), a.max(b))
}
