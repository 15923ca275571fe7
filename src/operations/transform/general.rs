use crate::math::Matrix3;
use crate::topology::Shape;

/// Applies an arbitrary 3x3 homogeneous affine matrix to a shape.
pub struct GeneralTransform {
    matrix: Matrix3,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, modifying the shape in-place.
    ///
    /// Transforms all vertex positions and drops every cached normal. A
    /// matrix with a negative determinant flips orientation, so the vertex
    /// order is reversed to keep the winding tag in agreement with the area.
    pub fn execute(&self, shape: &mut Shape) {
        let m = self.matrix;
        shape.map_positions(|p| m.transform_point(&p));
        if linear_determinant(&m) < 0.0 {
            tracing::trace!("orientation-flipping transform, reversing vertex order");
            shape.reverse_order_keep_winding();
        }
    }
}

/// Determinant of the linear (upper-left 2x2) part of a homogeneous matrix.
fn linear_determinant(m: &Matrix3) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point2, Vector2};
    use crate::topology::Winding;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Shape {
        Shape::from_points(
            &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
            Winding::CounterClockwise,
        )
        .unwrap()
    }

    #[test]
    fn identity_transform_preserves_vertices() {
        let mut shape = unit_square();
        let before = shape.points();
        GeneralTransform::new(Matrix3::identity()).execute(&mut shape);
        assert_eq!(shape.points(), before);
    }

    #[test]
    fn translation_shifts_all_vertices() {
        let mut shape = unit_square();
        GeneralTransform::new(Matrix3::new_translation(&Vector2::new(2.0, 3.0)))
            .execute(&mut shape);
        let first = shape.vertex(0).unwrap().position();
        assert_relative_eq!(first.x, 2.0);
        assert_relative_eq!(first.y, 3.0);
    }

    #[test]
    fn reflection_keeps_winding_consistent() {
        let mut shape = unit_square();
        let flip_x = Matrix3::new_nonuniform_scaling(&Vector2::new(-1.0, 1.0));
        GeneralTransform::new(flip_x).execute(&mut shape);
        assert_eq!(shape.winding(), Winding::CounterClockwise);
        assert!(shape.area() > 0.0);
        assert!(shape.validate().is_empty());
    }
}
