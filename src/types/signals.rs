use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trend classification from the fast/slow EMA pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Lateral,
    /// Not enough data to classify.
    #[default]
    Neutral,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Lateral => "lateral",
            Trend::Neutral => "neutral",
        }
    }
}

/// Where the signal machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    /// No signal outstanding.
    #[default]
    Idle,
    /// An entry fired and awaits its first result.
    EntryPending,
    /// First result missed; one retry remains.
    AwaitingResult,
}

/// The four observable signal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Entry,
    Hit,
    Retry,
    Miss,
}

impl SignalKind {
    /// Display message shown in the chart overlay.
    pub fn message(&self) -> &'static str {
        match self {
            SignalKind::Entry => "ENTRY!",
            SignalKind::Hit => "HIT!",
            SignalKind::Retry => "You can look again, manage it carefully",
            SignalKind::Miss => "MISS!",
        }
    }
}

/// A signal emitted by the heuristic, stamped for the renderer's event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEvent {
    pub id: Uuid,
    pub kind: SignalKind,
    pub message: String,
    pub timestamp: i64,
}

impl SignalEvent {
    pub fn new(kind: SignalKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: kind.message().to_string(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Session-scoped hit/miss tally. Survives undo, cleared only by reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub hits: u32,
    pub misses: u32,
}

impl SessionStats {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
