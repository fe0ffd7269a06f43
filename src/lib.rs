#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analysis;
pub mod config;
pub mod sketch;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the recovery engine + its results.
pub use crate::analysis::{analyze, analyze_with, AnalysisError, AnalyzeOptions, AxisScale};
pub use crate::types::{AxisCalibration, Recovery};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use chart_digitizer::prelude::*;
///
/// let shapes = demo_sketch();
/// let recovery = analyze(&shapes).unwrap();
/// assert_eq!(recovery.groups.len(), 2);
/// ```
pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisError};
    pub use crate::sketch::demo::demo_sketch;
    pub use crate::sketch::{ArrowShape, DrawShape, Shape};
    pub use crate::types::Recovery;
}
