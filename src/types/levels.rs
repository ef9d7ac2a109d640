use serde::{Deserialize, Serialize};

/// A local extremum of the cumulative series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingPoint {
    pub index: usize,
    pub value: f64,
}

/// Which side of the price a level sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Support,
    Resistance,
}

impl LevelKind {
    pub fn name(&self) -> &'static str {
        match self {
            LevelKind::Support => "support",
            LevelKind::Resistance => "resistance",
        }
    }
}

/// A horizontal support or resistance level anchored at a swing point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub kind: LevelKind,
    pub index: usize,
    pub value: f64,
}

impl Level {
    pub fn support(swing: SwingPoint) -> Self {
        Self {
            kind: LevelKind::Support,
            index: swing.index,
            value: swing.value,
        }
    }

    pub fn resistance(swing: SwingPoint) -> Self {
        Self {
            kind: LevelKind::Resistance,
            index: swing.index,
            value: swing.value,
        }
    }
}
