//! Built-in demo sketch used by the demo binary and the documentation.

use super::{ArrowHandles, ArrowShape, DashStyle, DrawShape, DrawStyle, Shape};

/// A ready-made annotated chart: two solid axes sharing their tails at
/// pixel (350, 700) — x up to 200, y up to 100 — and three strokes in two
/// colors.
pub fn demo_sketch() -> Vec<Shape> {
    vec![
        Shape::Other,
        Shape::Arrow(ArrowShape {
            point: [350.0, 700.0],
            handles: ArrowHandles {
                start: [0.0, 0.0],
                end: [400.0, 0.0],
            },
            label: "200".to_string(),
            dash: DashStyle::Solid,
            role: None,
        }),
        Shape::Arrow(ArrowShape {
            point: [350.0, 300.0],
            handles: ArrowHandles {
                start: [0.0, 400.0],
                end: [0.0, 0.0],
            },
            label: "100".to_string(),
            dash: DashStyle::Solid,
            role: None,
        }),
        Shape::Draw(DrawShape {
            point: vec![500.0, 600.0, 0.5],
            style: DrawStyle {
                color: "red".to_string(),
            },
        }),
        Shape::Draw(DrawShape {
            point: vec![600.0, 600.0, 0.5],
            style: DrawStyle {
                color: "red".to_string(),
            },
        }),
        Shape::Draw(DrawShape {
            point: vec![500.0, 500.0, 0.5],
            style: DrawStyle {
                color: "blue".to_string(),
            },
        }),
    ]
}
