use chart_digitizer::sketch::{
    ArrowHandles, ArrowShape, AxisRole, DashStyle, DrawShape, DrawStyle, Shape,
};

/// Builds an axis arrow anchored at `point` with the given tip offset.
pub fn axis_arrow(point: [f64; 2], end: [f64; 2], label: &str, dash: DashStyle) -> Shape {
    Shape::Arrow(ArrowShape {
        point,
        handles: ArrowHandles {
            start: [0.0, 0.0],
            end,
        },
        label: label.to_string(),
        dash,
        role: None,
    })
}

/// Same as [`axis_arrow`] but carrying an explicit role tag.
pub fn tagged_axis_arrow(
    point: [f64; 2],
    end: [f64; 2],
    label: &str,
    dash: DashStyle,
    role: AxisRole,
) -> Shape {
    Shape::Arrow(ArrowShape {
        point,
        handles: ArrowHandles {
            start: [0.0, 0.0],
            end,
        },
        label: label.to_string(),
        dash,
        role: Some(role),
    })
}

/// Builds a freehand stroke with a pressure component, as the canvas
/// records them.
pub fn stroke(x: f64, y: f64, color: &str) -> Shape {
    Shape::Draw(DrawShape {
        point: vec![x, y, 0.5],
        style: DrawStyle {
            color: color.to_string(),
        },
    })
}
