use crate::analysis::AxisScale;
use crate::sketch::AxisRole;

use serde::Serialize;
use std::collections::BTreeMap;

/// Calibration of one axis as recovered from its arrow.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisCalibration {
    pub role: AxisRole,
    /// Shared origin of the axis pair in canvas pixels.
    pub origin_px: [f64; 2],
    /// Arrow tip in canvas pixels, the position of `max_value`.
    pub endpoint_px: [f64; 2],
    /// Declared data value at the arrow tip.
    pub max_value: f64,
    pub scale: AxisScale,
}

/// Recovered data coordinates grouped by stroke color, together with the
/// axis calibration they were derived from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recovery {
    pub x_axis: AxisCalibration,
    pub y_axis: AxisCalibration,
    /// Color → ordered `(x, y)` pairs; per-color insertion order is the
    /// order the strokes were drawn in.
    pub groups: BTreeMap<String, Vec<[f64; 2]>>,
}

impl Recovery {
    /// Total number of recovered points across all groups.
    pub fn point_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
