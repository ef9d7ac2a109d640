use serde::Serialize;
use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::{EngineError, Result};
use crate::services::indicators::{
    average_range, classify_trend, compute_ema, last_defined, momentum, support_resistance,
};
use crate::services::series::SeriesStore;
use crate::services::signal::SignalEngine;
use crate::types::{
    Candle, Level, SessionStats, SignalEvent, SignalStatus, Trend, VisibleWindow,
};

/// What one submission produced: the new candle plus any signal events, in
/// the order they fired (resolution of a pending signal first, then a fresh
/// entry if one triggered).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub candle: Candle,
    pub events: Vec<SignalEvent>,
}

/// Read-only view of a whole chart, pulled by the renderer after a mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub values: Vec<f64>,
    pub candles: Vec<Candle>,
    pub ema_fast: Vec<Option<f64>>,
    pub ema_slow: Vec<Option<f64>>,
    pub support: Option<Level>,
    pub resistance: Option<Level>,
    pub trend: Trend,
    pub momentum: f64,
    pub average_range: f64,
    pub zoom_level: i32,
    pub visible_window: VisibleWindow,
    pub categories: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_status: Option<SignalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SessionStats>,
}

/// One chart pipeline: series store, derived indicators, optional signal
/// machine, and the zoom state. Every mutation runs a full recompute of the
/// derived state; at interactive sizes that is cheaper than being clever.
#[derive(Debug, Clone)]
pub struct ChartSession {
    config: ChartConfig,
    store: SeriesStore,
    signal: Option<SignalEngine>,
    ema_fast: Vec<Option<f64>>,
    ema_slow: Vec<Option<f64>>,
    support: Option<Level>,
    resistance: Option<Level>,
    trend: Trend,
    categories: Vec<Option<String>>,
    zoom_level: i32,
}

impl ChartSession {
    pub fn new(config: ChartConfig) -> Self {
        let signal = config
            .signal
            .enabled
            .then(|| SignalEngine::new(config.signal.clone()));
        Self {
            store: SeriesStore::new(config.wick_ratio),
            signal,
            ema_fast: Vec::new(),
            ema_slow: Vec::new(),
            support: None,
            resistance: None,
            trend: Trend::Neutral,
            categories: Vec::new(),
            zoom_level: 0,
            config,
        }
    }

    /// Submit a raw sample. Rejects non-finite values without touching any
    /// state. Signal resolution happens against the raw value before it is
    /// appended; entry generation happens after the recompute.
    pub fn submit_value(&mut self, raw: f64) -> Result<SessionUpdate> {
        self.submit_tagged(raw, None)
    }

    /// Submit a raw sample together with the category tag the UI attached to
    /// it. The tag is carried verbatim for the renderer's point styling.
    pub fn submit_tagged(&mut self, raw: f64, category: Option<&str>) -> Result<SessionUpdate> {
        if !raw.is_finite() {
            return Err(EngineError::NonFiniteValue(raw));
        }

        let mut events = Vec::new();
        if let Some(signal) = self.signal.as_mut() {
            events.extend(signal.evaluate_submission(raw));
        }

        let candle = self.store.append(raw);
        self.categories.push(category.map(str::to_owned));
        self.recompute();

        if let Some(signal) = self.signal.as_mut() {
            if let Some(last_value) = self.store.last_value() {
                events.extend(signal.maybe_enter(
                    self.trend,
                    self.store.len(),
                    last_value,
                    candle.is_bullish(),
                ));
            }
        }

        for event in &events {
            info!(kind = ?event.kind, "signal: {}", event.message);
        }
        Ok(SessionUpdate { candle, events })
    }

    /// Remove the latest point. A removal clears any pending signal and the
    /// entry streak; hit/miss stats are kept. Returns false on an empty
    /// series, in which case nothing changes at all.
    pub fn undo(&mut self) -> bool {
        if !self.store.undo_last() {
            return false;
        }
        self.categories.pop();
        self.recompute();
        if let Some(signal) = self.signal.as_mut() {
            signal.clear();
        }
        true
    }

    /// Back to a blank chart: series, indicators, zoom, signal state and
    /// stats all go.
    pub fn reset(&mut self) {
        self.store.reset();
        self.categories.clear();
        self.zoom_level = 0;
        if let Some(signal) = self.signal.as_mut() {
            signal.reset();
        }
        self.recompute();
        info!("chart session reset");
    }

    fn recompute(&mut self) {
        let values = self.store.values();
        self.ema_fast = compute_ema(values, self.config.ema.fast_period);
        self.ema_slow = compute_ema(values, self.config.ema.slow_period);
        let (support, resistance) = support_resistance(values, &self.config.levels);
        self.support = support;
        self.resistance = resistance;
        self.trend = classify_trend(
            last_defined(&self.ema_fast),
            last_defined(&self.ema_slow),
            values.len(),
            self.config.ema.slow_period,
            self.config.trend_tolerance,
        );
        debug!(trend = self.trend.label(), len = values.len(), "recomputed indicators");
    }

    // ----- zoom -----

    /// Shrink the visible window by one step. No-op once the window is at
    /// the floor, and a stub series pins the level back to zero.
    pub fn zoom_in(&mut self) {
        let view = &self.config.view;
        let shrink = self.zoom_level.max(0) as usize * view.zoom_in_step;
        let current_visible = view.base_points.saturating_sub(shrink).max(view.min_points);
        if current_visible > view.min_points && self.store.len() > view.min_points {
            self.zoom_level = (self.zoom_level + 1).max(0);
        } else if self.store.len() <= view.min_points {
            self.zoom_level = 0;
        }
    }

    /// Grow the visible window by one step, stopping once the whole history
    /// fits. History is measured in blocks of five points for the stop level.
    pub fn zoom_out(&mut self) {
        let len = self.store.len() as i32;
        let base = self.config.view.base_points as i32;
        let max_zoom_out = -((len - base).div_euclid(5));
        if len > 0 && self.zoom_level > max_zoom_out {
            self.zoom_level -= 1;
        } else if len > 0 {
            self.zoom_level = max_zoom_out;
        } else {
            self.zoom_level = 0;
        }
    }

    /// Adopt a zoom level computed elsewhere (pair synchronization).
    pub fn set_zoom_level(&mut self, level: i32) {
        self.zoom_level = level;
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn visible_window(&self) -> VisibleWindow {
        VisibleWindow::compute(self.store.len(), self.zoom_level, &self.config.view)
    }

    // ----- read-only queries -----

    pub fn values(&self) -> &[f64] {
        self.store.values()
    }

    pub fn candles(&self) -> &[Candle] {
        self.store.candles()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.store.last_value()
    }

    pub fn ema_fast(&self) -> &[Option<f64>] {
        &self.ema_fast
    }

    pub fn ema_slow(&self) -> &[Option<f64>] {
        &self.ema_slow
    }

    pub fn support(&self) -> Option<Level> {
        self.support
    }

    pub fn resistance(&self) -> Option<Level> {
        self.resistance
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn momentum(&self) -> f64 {
        momentum(self.store.values(), self.config.momentum_lookback)
    }

    pub fn average_range(&self) -> f64 {
        average_range(self.store.values(), self.config.range_lookback)
    }

    pub fn signal_status(&self) -> Option<SignalStatus> {
        self.signal.as_ref().map(|s| s.status())
    }

    pub fn stats(&self) -> Option<SessionStats> {
        self.signal.as_ref().map(|s| s.stats())
    }

    pub fn categories(&self) -> &[Option<String>] {
        &self.categories
    }

    /// Whether the latest value sits within the highlight tolerance of the
    /// current support level.
    pub fn near_support(&self) -> bool {
        self.near_level(self.support)
    }

    /// Same check against the resistance level.
    pub fn near_resistance(&self) -> bool {
        self.near_level(self.resistance)
    }

    fn near_level(&self, level: Option<Level>) -> bool {
        match (self.store.last_value(), level) {
            (Some(last), Some(level)) => {
                (last - level.value).abs() < self.config.levels.highlight_tolerance
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            values: self.store.values().to_vec(),
            candles: self.store.candles().to_vec(),
            ema_fast: self.ema_fast.clone(),
            ema_slow: self.ema_slow.clone(),
            support: self.support,
            resistance: self.resistance,
            trend: self.trend,
            momentum: self.momentum(),
            average_range: self.average_range(),
            zoom_level: self.zoom_level,
            visible_window: self.visible_window(),
            categories: self.categories.clone(),
            signal_status: self.signal_status(),
            stats: self.stats(),
        }
    }
}

/// What one pair submission produced on each chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairUpdate {
    pub primary: SessionUpdate,
    pub companion: SessionUpdate,
}

/// The primary chart and its miniature companion, driven in lockstep. One
/// user action feeds both; the companion gets its own sample and the category
/// tag, runs no signal machine, and mirrors the primary's zoom level.
#[derive(Debug, Clone)]
pub struct ChartPair {
    primary: ChartSession,
    companion: ChartSession,
}

impl ChartPair {
    pub fn new() -> Self {
        Self::with_configs(ChartConfig::primary(), ChartConfig::companion())
    }

    pub fn with_configs(primary: ChartConfig, companion: ChartConfig) -> Self {
        Self {
            primary: ChartSession::new(primary),
            companion: ChartSession::new(companion),
        }
    }

    /// Forward one user action to both charts. Both samples are validated
    /// up front so a bad pair leaves neither chart touched.
    pub fn submit(
        &mut self,
        raw: f64,
        companion_value: f64,
        category: &str,
    ) -> Result<PairUpdate> {
        if !raw.is_finite() {
            return Err(EngineError::NonFiniteValue(raw));
        }
        if !companion_value.is_finite() {
            return Err(EngineError::NonFiniteValue(companion_value));
        }
        let primary = self.primary.submit_value(raw)?;
        let companion = self.companion.submit_tagged(companion_value, Some(category))?;
        Ok(PairUpdate { primary, companion })
    }

    /// Undo on both charts. Reports whether the primary removed a point.
    pub fn undo(&mut self) -> bool {
        let removed = self.primary.undo();
        self.companion.undo();
        removed
    }

    pub fn reset(&mut self) {
        self.primary.reset();
        self.companion.reset();
    }

    pub fn zoom_in(&mut self) {
        self.primary.zoom_in();
        self.companion.set_zoom_level(self.primary.zoom_level());
    }

    pub fn zoom_out(&mut self) {
        self.primary.zoom_out();
        self.companion.set_zoom_level(self.primary.zoom_level());
    }

    pub fn primary(&self) -> &ChartSession {
        &self.primary
    }

    pub fn companion(&self) -> &ChartSession {
        &self.companion
    }
}

impl Default for ChartPair {
    fn default() -> Self {
        Self::new()
    }
}
