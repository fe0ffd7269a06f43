//! Coordinate recovery engine turning a canvas snapshot into data points.
//!
//! Overview
//! - Classifies the shape snapshot into axis arrows and freehand strokes,
//!   ignoring every other canvas kind.
//! - Gates on readiness: exactly two arrows and at least one stroke.
//! - Resolves which arrow is the x and which the y axis, by explicit role
//!   tags when both arrows carry distinct ones, by tip geometry otherwise.
//! - Parses the declared maxima from the arrow labels and builds a 2×2
//!   pixel basis whose rows are the axis vectors scaled by their maxima.
//! - Inverts the basis and maps every stroke point into data space,
//!   applying an exponential remapping on axes drawn dashed or dotted.
//!
//! The engine is a pure function of the snapshot: no I/O, no state, safe to
//! call redundantly on every canvas change. Repeated calls on an unchanged
//! snapshot yield identical results.
//!
//! Modules
//! - `error` – the recoverable [`AnalysisError`] conditions.
//! - `axes` – classification, axis-pair resolution and label parsing.
//! - `basis` – pixel basis construction and inversion.
//! - `scale` – linear/logarithmic axis scales.
//! - `grouping` – stroke grouping by color.

mod axes;
mod basis;
mod error;
mod grouping;
mod scale;

pub use error::AnalysisError;
pub use scale::AxisScale;

use crate::sketch::{AxisRole, Shape};
use crate::types::{AxisCalibration, Recovery};

use axes::{classify, parse_axis_max, resolve_pair};
use basis::PixelBasis;
use grouping::group_by_color;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Numeric guards for the recovery engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Smallest |det| of the scaled axis basis still considered invertible.
    pub det_epsilon: f64,
    /// Maximum disagreement (pixels) between the two arrow tails before a
    /// warning is logged.
    pub origin_tol_px: f64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            det_epsilon: 1e-12,
            origin_tol_px: 1.0,
        }
    }
}

/// Recover data coordinates from a canvas snapshot with default options.
pub fn analyze(shapes: &[Shape]) -> Result<Recovery, AnalysisError> {
    analyze_with(shapes, &AnalyzeOptions::default())
}

/// Recover data coordinates from a canvas snapshot.
///
/// Returns [`AnalysisError::NotReady`] while the sketch does not yet hold
/// exactly two axis arrows and at least one stroke,
/// [`AnalysisError::MalformedLabel`] when an arrow label names no usable
/// maximum, and [`AnalysisError::DegenerateAxes`] when the axis vectors
/// are parallel or zero-length.
pub fn analyze_with(
    shapes: &[Shape],
    options: &AnalyzeOptions,
) -> Result<Recovery, AnalysisError> {
    let classified = classify(shapes);
    if classified.arrows.len() != 2 || classified.strokes.is_empty() {
        return Err(AnalysisError::NotReady {
            axes: classified.arrows.len(),
            strokes: classified.strokes.len(),
        });
    }

    let pair = resolve_pair(classified.arrows[0], classified.arrows[1]);

    // Both arrows should share a visual origin; the x-axis tail is
    // authoritative when they disagree.
    let origin = pair.x.tail();
    let y_tail = pair.y.tail();
    let tail_gap = ((y_tail[0] - origin[0]).powi(2) + (y_tail[1] - origin[1]).powi(2)).sqrt();
    if tail_gap > options.origin_tol_px {
        warn!("axis tails disagree by {tail_gap:.1}px, using the x-axis tail as origin");
    }

    let x_max = parse_axis_max(&pair.x.label).ok_or_else(|| AnalysisError::MalformedLabel {
        axis: AxisRole::X,
        label: pair.x.label.clone(),
    })?;
    let y_max = parse_axis_max(&pair.y.label).ok_or_else(|| AnalysisError::MalformedLabel {
        axis: AxisRole::Y,
        label: pair.y.label.clone(),
    })?;
    let x_scale = AxisScale::from_dash(pair.x.dash);
    let y_scale = AxisScale::from_dash(pair.y.dash);

    let basis = PixelBasis::from_axes(
        origin,
        pair.x.tip(),
        pair.y.tip(),
        x_max,
        y_max,
        options.det_epsilon,
    )
    .map_err(|determinant| AnalysisError::DegenerateAxes { determinant })?;

    let mut groups = group_by_color(&classified.strokes);
    for points in groups.values_mut() {
        for point in points.iter_mut() {
            let linear = basis.apply(*point);
            *point = [
                x_scale.correct(x_max, linear[0]),
                y_scale.correct(y_max, linear[1]),
            ];
        }
    }
    debug!(
        "recovered {} points in {} groups (x_max={x_max}, y_max={y_max})",
        groups.values().map(Vec::len).sum::<usize>(),
        groups.len()
    );

    Ok(Recovery {
        x_axis: AxisCalibration {
            role: AxisRole::X,
            origin_px: origin,
            endpoint_px: pair.x.tip(),
            max_value: x_max,
            scale: x_scale,
        },
        y_axis: AxisCalibration {
            role: AxisRole::Y,
            origin_px: origin,
            endpoint_px: pair.y.tip(),
            max_value: y_max,
            scale: y_scale,
        },
        groups,
    })
}
