//! Axis-pair resolution: picking the x and y arrows out of a sketch and
//! parsing their declared maxima.

use crate::sketch::{ArrowShape, AxisRole, DrawShape, Shape};

use log::{debug, warn};

/// Arrows and usable strokes split out of a raw shape list.
pub(crate) struct Classified<'a> {
    pub arrows: Vec<&'a ArrowShape>,
    pub strokes: Vec<&'a DrawShape>,
}

/// Partition a shape snapshot into axis arrows and strokes, dropping every
/// other kind. Strokes whose point record is shorter than two components
/// are dropped as well.
pub(crate) fn classify(shapes: &[Shape]) -> Classified<'_> {
    let mut arrows = Vec::new();
    let mut strokes = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Arrow(arrow) => arrows.push(arrow),
            Shape::Draw(stroke) => {
                if stroke.position().is_some() {
                    strokes.push(stroke);
                } else {
                    debug!("dropping stroke with short point record");
                }
            }
            Shape::Other => {}
        }
    }
    Classified { arrows, strokes }
}

/// The two axis arrows in x-then-y order.
pub(crate) struct AxisPair<'a> {
    pub x: &'a ArrowShape,
    pub y: &'a ArrowShape,
}

/// Assign the two arrows to the x and y axes.
///
/// Explicit role tags win when both arrows carry distinct roles. Otherwise
/// the arrow whose tip offset has the larger x component becomes the
/// x-axis; a tie keeps the input order.
pub(crate) fn resolve_pair<'a>(
    first: &'a ArrowShape,
    second: &'a ArrowShape,
) -> AxisPair<'a> {
    match (first.role, second.role) {
        (Some(AxisRole::X), Some(AxisRole::Y)) => AxisPair {
            x: first,
            y: second,
        },
        (Some(AxisRole::Y), Some(AxisRole::X)) => AxisPair {
            x: second,
            y: first,
        },
        (Some(role), Some(_)) => {
            warn!("both axis arrows tagged {role}, falling back to geometric ordering");
            resolve_by_geometry(first, second)
        }
        _ => resolve_by_geometry(first, second),
    }
}

fn resolve_by_geometry<'a>(
    first: &'a ArrowShape,
    second: &'a ArrowShape,
) -> AxisPair<'a> {
    if first.handles.end[0] < second.handles.end[0] {
        AxisPair {
            x: second,
            y: first,
        }
    } else {
        AxisPair {
            x: first,
            y: second,
        }
    }
}

/// Parse an axis label the way users write them: optional leading
/// whitespace and sign, then a base-10 digit run; trailing text such as a
/// unit suffix is ignored. Returns `None` when no digits are present or
/// the value is zero, which is unusable as an axis maximum.
pub(crate) fn parse_axis_max(label: &str) -> Option<f64> {
    let rest = label.trim_start();
    let (sign, rest) = match rest.strip_prefix('-') {
        Some(stripped) => (-1.0, stripped),
        None => (1.0, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    let value = sign * value;
    (value != 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::{ArrowHandles, DashStyle, DrawStyle};

    fn arrow(end: [f64; 2], role: Option<AxisRole>) -> ArrowShape {
        ArrowShape {
            point: [0.0, 0.0],
            handles: ArrowHandles {
                start: [0.0, 0.0],
                end,
            },
            label: "1".to_string(),
            dash: DashStyle::Solid,
            role,
        }
    }

    #[test]
    fn parses_plain_and_prefixed_labels() {
        assert_eq!(parse_axis_max("200"), Some(200.0));
        assert_eq!(parse_axis_max(" 42 units"), Some(42.0));
        assert_eq!(parse_axis_max("+7"), Some(7.0));
        assert_eq!(parse_axis_max("-7"), Some(-7.0));
        assert_eq!(parse_axis_max("100px"), Some(100.0));
    }

    #[test]
    fn rejects_unusable_labels() {
        assert_eq!(parse_axis_max(""), None);
        assert_eq!(parse_axis_max("abc"), None);
        assert_eq!(parse_axis_max("-"), None);
        assert_eq!(parse_axis_max("0"), None);
        assert_eq!(parse_axis_max("x100"), None);
    }

    #[test]
    fn geometry_picks_larger_tip_x_as_x_axis() {
        let horizontal = arrow([400.0, 0.0], None);
        let vertical = arrow([0.0, -400.0], None);
        let pair = resolve_pair(&vertical, &horizontal);
        assert_eq!(pair.x.handles.end, [400.0, 0.0]);
        assert_eq!(pair.y.handles.end, [0.0, -400.0]);
    }

    #[test]
    fn geometry_tie_keeps_input_order() {
        let a = arrow([100.0, 0.0], None);
        let b = arrow([100.0, -50.0], None);
        let pair = resolve_pair(&a, &b);
        assert_eq!(pair.x.handles.end, [100.0, 0.0]);
    }

    #[test]
    fn distinct_role_tags_override_geometry() {
        // Tagged against the heuristic: the y-marked arrow points right.
        let tagged_y = arrow([400.0, 0.0], Some(AxisRole::Y));
        let tagged_x = arrow([0.0, -400.0], Some(AxisRole::X));
        let pair = resolve_pair(&tagged_y, &tagged_x);
        assert_eq!(pair.x.handles.end, [0.0, -400.0]);
        assert_eq!(pair.y.handles.end, [400.0, 0.0]);
    }

    #[test]
    fn conflicting_tags_fall_back_to_geometry() {
        let a = arrow([0.0, -400.0], Some(AxisRole::X));
        let b = arrow([400.0, 0.0], Some(AxisRole::X));
        let pair = resolve_pair(&a, &b);
        assert_eq!(pair.x.handles.end, [400.0, 0.0]);
    }

    #[test]
    fn classify_drops_foreign_and_short_shapes() {
        let shapes = vec![
            Shape::Other,
            Shape::Arrow(arrow([400.0, 0.0], None)),
            Shape::Draw(DrawShape {
                point: vec![500.0],
                style: DrawStyle::default(),
            }),
            Shape::Draw(DrawShape {
                point: vec![500.0, 600.0],
                style: DrawStyle::default(),
            }),
        ];
        let classified = classify(&shapes);
        assert_eq!(classified.arrows.len(), 1);
        assert_eq!(classified.strokes.len(), 1);
    }
}
