//! Pixel→data basis built from the two axis vectors.

use nalgebra::{Matrix2, Vector2};

/// Invertible mapping from canvas pixel positions to data-space values.
///
/// The rows of the forward matrix are the axis vectors scaled by the
/// inverse of their declared maxima, so applying the inverse to
/// `p - origin` yields coordinates directly in axis units.
pub(crate) struct PixelBasis {
    origin: Vector2<f64>,
    inverse: Matrix2<f64>,
}

impl PixelBasis {
    /// Build the basis from the shared origin, the two arrow tips and the
    /// declared maxima. Returns the determinant when it is non-finite or
    /// too close to zero to invert (parallel or zero-length axes).
    pub fn from_axes(
        origin: [f64; 2],
        x_tip: [f64; 2],
        y_tip: [f64; 2],
        x_max: f64,
        y_max: f64,
        det_epsilon: f64,
    ) -> Result<Self, f64> {
        let origin = Vector2::new(origin[0], origin[1]);
        let row_x = (Vector2::new(x_tip[0], x_tip[1]) - origin) / x_max;
        let row_y = (Vector2::new(y_tip[0], y_tip[1]) - origin) / y_max;
        let forward = Matrix2::new(row_x.x, row_x.y, row_y.x, row_y.y);
        let det = forward.determinant();
        if !det.is_finite() || det.abs() < det_epsilon {
            return Err(det);
        }
        let inverse = forward.try_inverse().ok_or(det)?;
        Ok(Self { origin, inverse })
    }

    /// Map one canvas pixel position into the linear data domain.
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let v = self.inverse * (Vector2::new(point[0], point[1]) - self.origin);
        [v.x, v.y]
    }
}
