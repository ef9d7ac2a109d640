use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// The slice of the series the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleWindow {
    pub start: usize,
    pub len: usize,
}

impl VisibleWindow {
    /// Window for a given zoom level. Positive levels shrink the window by
    /// `zoom_in_step` points each (never below `min_points`); negative levels
    /// grow it by `zoom_out_step` points each, capped at the full history.
    /// The window always ends at the most recent point.
    pub fn compute(series_len: usize, zoom_level: i32, view: &ViewConfig) -> Self {
        if zoom_level >= 0 {
            let shrink = zoom_level as usize * view.zoom_in_step;
            let num = view.base_points.saturating_sub(shrink).max(view.min_points);
            let start = series_len.saturating_sub(num);
            Self {
                start,
                len: series_len - start,
            }
        } else {
            let grow = zoom_level.unsigned_abs() as usize * view.zoom_out_step;
            let num = (view.base_points + grow).min(series_len);
            Self {
                start: series_len - num,
                len: num,
            }
        }
    }
}
