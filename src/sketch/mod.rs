//! Shape records handed over by the drawing canvas.
//!
//! The canvas is an external collaborator: on every change it hands the
//! engine a full snapshot of the shapes currently drawn on it. Only two
//! kinds carry meaning here — axis arrows and freehand strokes. Every other
//! kind (ellipses, sticky notes, …) deserializes into [`Shape::Other`] and
//! is ignored by the analysis.

pub mod demo;
pub mod io;

use serde::{Deserialize, Serialize};

/// Which coordinate axis an arrow stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRole {
    X,
    Y,
}

impl std::fmt::Display for AxisRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisRole::X => write!(f, "x"),
            AxisRole::Y => write!(f, "y"),
        }
    }
}

/// Stroke pattern of an arrow as drawn on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

impl DashStyle {
    /// Dashed and dotted arrows declare their axis logarithmic.
    pub fn is_logarithmic(self) -> bool {
        matches!(self, DashStyle::Dashed | DashStyle::Dotted)
    }
}

/// Handle offsets of an arrow, relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrowHandles {
    /// Tail offset; `[0, 0]` unless the arrow was dragged out from its tip.
    #[serde(default)]
    pub start: [f64; 2],
    /// Tip offset from the anchor.
    pub end: [f64; 2],
}

/// A user-drawn axis arrow: the direction, pixel extent and declared
/// maximum value of one coordinate axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowShape {
    /// Anchor in canvas pixel space.
    pub point: [f64; 2],
    pub handles: ArrowHandles,
    /// Decimal string naming the data value at the arrow tip.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub dash: DashStyle,
    /// Explicit axis role. When both arrows carry distinct roles the tags
    /// win over the geometric ordering heuristic.
    #[serde(default)]
    pub role: Option<AxisRole>,
}

impl ArrowShape {
    /// Visual tail of the arrow in absolute pixel coordinates.
    pub fn tail(&self) -> [f64; 2] {
        [
            self.point[0] + self.handles.start[0],
            self.point[1] + self.handles.start[1],
        ]
    }

    /// Tip of the arrow in absolute pixel coordinates.
    pub fn tip(&self) -> [f64; 2] {
        [
            self.point[0] + self.handles.end[0],
            self.point[1] + self.handles.end[1],
        ]
    }
}

/// Stroke style; only the color matters, as an opaque grouping key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub color: String,
}

/// A freehand stroke marking one data observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawShape {
    /// `[x, y]` or `[x, y, pressure]`; only the first two components carry
    /// meaning.
    pub point: Vec<f64>,
    #[serde(default)]
    pub style: DrawStyle,
}

impl DrawShape {
    /// First two components of the stroke point, if present.
    pub fn position(&self) -> Option<[f64; 2]> {
        match self.point.as_slice() {
            [x, y, ..] => Some([*x, *y]),
            _ => None,
        }
    }
}

/// Discriminated union over the canvas shape kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Arrow(ArrowShape),
    Draw(DrawShape),
    /// Any other canvas kind; present in the snapshot but meaningless here.
    #[serde(other)]
    Other,
}
