use crate::error::{OperationError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::topology::{Shape, Winding};

/// Creates an open path (no closing edge) through a sequence of points.
pub struct MakePath {
    points: Vec<Point2>,
}

impl MakePath {
    /// Creates a new `MakePath` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the operation.
    ///
    /// The winding tag follows the signed area of the points as if closed,
    /// so segment normals of a path bending left point to its right.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are provided.
    pub fn execute(&self) -> Result<Shape> {
        if self.points.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required for an open path".to_owned(),
            )
            .into());
        }
        let winding = Winding::from_signed_area(signed_area_2d(&self.points));
        Ok(Shape::from_raw(self.points.clone(), winding, true))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn two_points_one_segment() {
        let shape = MakePath::new(vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)])
            .execute()
            .unwrap();
        assert!(shape.is_open());
        assert_eq!(shape.segment_count(), 1);
        assert!(shape.area().abs() < f64::EPSILON);
    }

    #[test]
    fn single_point_fails() {
        assert!(MakePath::new(vec![Point2::new(0.0, 0.0)]).execute().is_err());
        assert!(MakePath::new(Vec::new()).execute().is_err());
    }
}
