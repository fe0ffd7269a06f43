use crate::sketch::AxisRole;

/// Reasons why coordinate recovery may not produce a result.
///
/// All three are recoverable at the engine boundary: the caller shows an
/// "incomplete/invalid setup" state and keeps the canvas interactive.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// The canvas does not yet hold exactly two axis arrows and at least
    /// one stroke. The expected steady state while the user is drawing.
    NotReady { axes: usize, strokes: usize },
    /// An axis label does not name a usable numeric maximum.
    MalformedLabel { axis: AxisRole, label: String },
    /// The two axis vectors are parallel or one has zero length; the pixel
    /// basis cannot be inverted.
    DegenerateAxes { determinant: f64 },
}

impl AnalysisError {
    /// True for the incomplete-canvas state, which callers typically
    /// render as "no result yet" rather than as a failure.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, AnalysisError::NotReady { .. })
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::NotReady { axes, strokes } => {
                write!(
                    f,
                    "sketch incomplete (axes={axes}, strokes={strokes}, need 2 axes and >=1 stroke)"
                )
            }
            AnalysisError::MalformedLabel { axis, label } => {
                write!(f, "{axis}-axis label {label:?} has no usable numeric maximum")
            }
            AnalysisError::DegenerateAxes { determinant } => {
                write!(
                    f,
                    "axis arrows are parallel or zero-length (det={determinant:.3e})"
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
