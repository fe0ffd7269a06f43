//! Grouping of strokes by color.

use crate::sketch::DrawShape;

use std::collections::BTreeMap;

/// Group stroke positions by color, preserving per-color insertion order.
/// Colors are opaque, case-sensitive keys; a key exists only when it has at
/// least one point.
pub(crate) fn group_by_color(strokes: &[&DrawShape]) -> BTreeMap<String, Vec<[f64; 2]>> {
    let mut groups: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for stroke in strokes {
        if let Some(position) = stroke.position() {
            groups
                .entry(stroke.style.color.clone())
                .or_default()
                .push(position);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::DrawStyle;

    fn stroke(x: f64, y: f64, color: &str) -> DrawShape {
        DrawShape {
            point: vec![x, y],
            style: DrawStyle {
                color: color.to_string(),
            },
        }
    }

    #[test]
    fn groups_keep_insertion_order_per_color() {
        let strokes = [
            stroke(1.0, 1.0, "red"),
            stroke(3.0, 3.0, "blue"),
            stroke(2.0, 2.0, "red"),
        ];
        let refs: Vec<&DrawShape> = strokes.iter().collect();
        let groups = group_by_color(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["red"], vec![[1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(groups["blue"], vec![[3.0, 3.0]]);
    }

    #[test]
    fn colors_are_case_sensitive() {
        let strokes = [stroke(1.0, 1.0, "Red"), stroke(2.0, 2.0, "red")];
        let refs: Vec<&DrawShape> = strokes.iter().collect();
        let groups = group_by_color(&refs);
        assert_eq!(groups.len(), 2);
    }
}
