use crate::math::{Matrix3, Point2};
use crate::topology::Shape;

use super::GeneralTransform;

/// Rotates a shape counter-clockwise around a pivot point.
pub struct Rotate {
    pivot: Point2,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(pivot: Point2, angle: f64) -> Self {
        Self { pivot, angle }
    }

    /// Executes the rotation, modifying the shape in-place.
    pub fn execute(&self, shape: &mut Shape) {
        // Translate to origin, rotate, translate back
        let t_neg = Matrix3::new_translation(&(-self.pivot.coords));
        let rot = Matrix3::new_rotation(self.angle);
        let t_pos = Matrix3::new_translation(&self.pivot.coords);
        GeneralTransform::new(t_pos * rot * t_neg).execute(shape);
    }
}
