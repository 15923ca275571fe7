use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point2, Vector2, TOLERANCE};
use crate::topology::Shape;

use super::GeneralTransform;

/// Mirrors a shape across a line defined by a point and a direction.
pub struct Mirror {
    axis_origin: Point2,
    axis_direction: Vector2,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(axis_origin: Point2, axis_direction: Vector2) -> Self {
        Self {
            axis_origin,
            axis_direction,
        }
    }

    /// Executes the mirror, modifying the shape in-place.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the axis direction is zero-length.
    pub fn execute(&self, shape: &mut Shape) -> Result<()> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let d = self.axis_direction / len;

        // Reflection across the axis: 2 d dᵀ - I.
        #[rustfmt::skip]
        let reflect = Matrix3::new(
            2.0 * d.x * d.x - 1.0, 2.0 * d.x * d.y,       0.0,
            2.0 * d.x * d.y,       2.0 * d.y * d.y - 1.0, 0.0,
            0.0,                   0.0,                   1.0,
        );
        let t_neg = Matrix3::new_translation(&(-self.axis_origin.coords));
        let t_pos = Matrix3::new_translation(&self.axis_origin.coords);
        GeneralTransform::new(t_pos * reflect * t_neg).execute(shape);
        Ok(())
    }
}
