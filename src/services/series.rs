use tracing::debug;

use crate::types::Candle;

/// Owns the cumulative series and the candles derived from it.
///
/// Samples are signed increments; each append folds one into the running sum
/// and produces a candle whose open is the previous close. Undo removes the
/// latest point and rebaselines the sum on whatever value is left.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    values: Vec<f64>,
    candles: Vec<Candle>,
    accumulated: f64,
    wick_ratio: f64,
}

impl SeriesStore {
    pub fn new(wick_ratio: f64) -> Self {
        Self {
            values: Vec::new(),
            candles: Vec::new(),
            accumulated: 0.0,
            wick_ratio,
        }
    }

    /// Fold a sample into the series and return the candle it produced.
    pub fn append(&mut self, sample: f64) -> Candle {
        let open = self.candles.last().map(|c| c.close).unwrap_or(0.0);
        self.accumulated += sample;
        let candle = Candle::from_increment(open, self.accumulated, sample, self.wick_ratio);
        self.values.push(self.accumulated);
        self.candles.push(candle);
        debug!(value = self.accumulated, len = self.values.len(), "appended sample");
        candle
    }

    /// Remove the latest point. Returns false on an empty series.
    pub fn undo_last(&mut self) -> bool {
        if self.values.pop().is_none() {
            return false;
        }
        self.candles.pop();
        self.accumulated = self.values.last().copied().unwrap_or(0.0);
        debug!(len = self.values.len(), "removed latest sample");
        true
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.candles.clear();
        self.accumulated = 0.0;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn last_candle(&self) -> Option<&Candle> {
        self.candles.last()
    }
}
