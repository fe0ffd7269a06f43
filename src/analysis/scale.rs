//! Axis scale handling: linear pass-through or logarithmic remapping.

use crate::sketch::DashStyle;

use serde::{Deserialize, Serialize};

/// How values grow along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Logarithmic,
}

impl AxisScale {
    /// Dashed and dotted arrows declare a logarithmic axis.
    pub fn from_dash(dash: DashStyle) -> Self {
        if dash.is_logarithmic() {
            AxisScale::Logarithmic
        } else {
            AxisScale::Linear
        }
    }

    /// Reinterpret a linearly recovered coordinate on this scale.
    ///
    /// On a logarithmic axis the linear value is an exponent fraction: the
    /// result is `max^(v / max)`, so the arrow tip maps to `max` and the
    /// origin to 1.
    pub fn correct(self, max: f64, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::Logarithmic => max.powf(value / max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_passes_through() {
        assert_eq!(AxisScale::Linear.correct(200.0, 37.5), 37.5);
    }

    #[test]
    fn log_maps_tip_to_max_and_origin_to_one() {
        assert!((AxisScale::Logarithmic.correct(200.0, 200.0) - 200.0).abs() < 1e-9);
        assert!((AxisScale::Logarithmic.correct(200.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log_midpoint_is_geometric_mean() {
        // 200^(100/200) = sqrt(200)
        let corrected = AxisScale::Logarithmic.correct(200.0, 100.0);
        assert!((corrected - 14.142135623730951).abs() < 1e-9);
    }

    #[test]
    fn from_dash_marks_dashed_and_dotted() {
        assert_eq!(AxisScale::from_dash(DashStyle::Solid), AxisScale::Linear);
        assert_eq!(AxisScale::from_dash(DashStyle::None), AxisScale::Linear);
        assert_eq!(
            AxisScale::from_dash(DashStyle::Dashed),
            AxisScale::Logarithmic
        );
        assert_eq!(
            AxisScale::from_dash(DashStyle::Dotted),
            AxisScale::Logarithmic
        );
    }
}
