use crate::math::{Matrix3, Point2, Vector2};
use crate::topology::Shape;

use super::GeneralTransform;

/// Scales a shape from a center point, independently along X and Y.
pub struct Scale {
    center: Point2,
    sx: f64,
    sy: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point2, sx: f64, sy: f64) -> Self {
        Self { center, sx, sy }
    }

    /// Creates a uniform `Scale` operation.
    #[must_use]
    pub fn uniform(center: Point2, factor: f64) -> Self {
        Self::new(center, factor, factor)
    }

    /// Executes the scaling, modifying the shape in-place.
    pub fn execute(&self, shape: &mut Shape) {
        let t_neg = Matrix3::new_translation(&(-self.center.coords));
        let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(self.sx, self.sy));
        let t_pos = Matrix3::new_translation(&self.center.coords);
        GeneralTransform::new(t_pos * scale * t_neg).execute(shape);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::topology::Winding;

    fn square() -> Shape {
        Shape::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ],
            Winding::CounterClockwise,
        )
        .unwrap()
    }

    #[test]
    fn uniform_scale_about_center() {
        let mut shape = square();
        Scale::uniform(Point2::new(1.0, 1.0), 3.0).execute(&mut shape);
        assert_relative_eq!(shape.area(), 36.0, epsilon = 1e-9);
        let c = shape.centroid();
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_factor_preserves_winding_agreement() {
        let mut shape = square();
        Scale::new(Point2::origin(), 1.0, -1.0).execute(&mut shape);
        assert_eq!(shape.winding(), Winding::CounterClockwise);
        assert!(shape.area() > 0.0);
    }
}
