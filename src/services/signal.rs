use tracing::debug;

use crate::config::SignalConfig;
use crate::types::{SessionStats, SignalEvent, SignalKind, SignalStatus, Trend};

/// The manual trading-signal heuristic.
///
/// An entry fires after an append when conditions line up; the next one or
/// two submitted raw values then resolve it. A raw value at or above the hit
/// threshold scores a hit. Below it, the first fail grants a retry and the
/// second scores a miss. Hits and misses accumulate in the session stats.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    config: SignalConfig,
    status: SignalStatus,
    consecutive_fails: u32,
    consecutive_entries: u32,
    stats: SessionStats,
}

impl SignalEngine {
    pub fn new(config: SignalConfig) -> Self {
        Self {
            config,
            status: SignalStatus::Idle,
            consecutive_fails: 0,
            consecutive_entries: 0,
            stats: SessionStats::default(),
        }
    }

    /// Resolve any pending signal against the raw value the user is about to
    /// submit. Runs before the value is appended to the series.
    ///
    /// An idle submission breaks the consecutive-entry streak instead.
    pub fn evaluate_submission(&mut self, raw: f64) -> Option<SignalEvent> {
        match self.status {
            SignalStatus::EntryPending => {
                if raw >= self.config.hit_threshold {
                    self.stats.record_hit();
                    self.status = SignalStatus::Idle;
                    self.consecutive_fails = 0;
                    debug!(hits = self.stats.hits, "entry resolved as hit");
                    Some(SignalEvent::new(SignalKind::Hit))
                } else {
                    self.consecutive_fails += 1;
                    if self.consecutive_fails == 1 {
                        self.status = SignalStatus::AwaitingResult;
                        debug!("first fail, granting retry");
                        Some(SignalEvent::new(SignalKind::Retry))
                    } else {
                        self.stats.record_miss();
                        self.status = SignalStatus::Idle;
                        self.consecutive_fails = 0;
                        debug!(misses = self.stats.misses, "entry resolved as miss");
                        Some(SignalEvent::new(SignalKind::Miss))
                    }
                }
            }
            SignalStatus::AwaitingResult => {
                if raw >= self.config.hit_threshold {
                    self.stats.record_hit();
                    self.status = SignalStatus::Idle;
                    self.consecutive_fails = 0;
                    debug!(hits = self.stats.hits, "retry resolved as hit");
                    Some(SignalEvent::new(SignalKind::Hit))
                } else {
                    self.stats.record_miss();
                    self.status = SignalStatus::Idle;
                    self.consecutive_fails = 0;
                    debug!(misses = self.stats.misses, "retry resolved as miss");
                    Some(SignalEvent::new(SignalKind::Miss))
                }
            }
            SignalStatus::Idle => {
                // A manual submission with nothing pending breaks the streak.
                self.consecutive_entries = 0;
                None
            }
        }
    }

    /// Fire an entry if the chart state allows one. Runs after the append and
    /// recompute, against the fresh trend and candle.
    pub fn maybe_enter(
        &mut self,
        trend: Trend,
        data_len: usize,
        last_value: f64,
        bullish_candle: bool,
    ) -> Option<SignalEvent> {
        if self.status != SignalStatus::Idle
            || self.consecutive_entries >= self.config.max_consecutive_entries
        {
            return None;
        }
        if trend == Trend::Bullish
            && data_len >= self.config.min_points
            && last_value < self.config.entry_ceiling
            && bullish_candle
        {
            self.status = SignalStatus::EntryPending;
            self.consecutive_fails = 0;
            self.consecutive_entries += 1;
            debug!(streak = self.consecutive_entries, "entry signal fired");
            return Some(SignalEvent::new(SignalKind::Entry));
        }
        None
    }

    /// Drop any pending signal and both counters. Stats are kept; they only
    /// go away on a full reset.
    pub fn clear(&mut self) {
        self.status = SignalStatus::Idle;
        self.consecutive_fails = 0;
        self.consecutive_entries = 0;
    }

    pub fn reset(&mut self) {
        self.clear();
        self.stats.reset();
    }

    pub fn status(&self) -> SignalStatus {
        self.status
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn consecutive_entries(&self) -> u32 {
        self.consecutive_entries
    }
}
