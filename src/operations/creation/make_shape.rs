use crate::error::{Result, TopologyError};
use crate::math::vector_2d::points_coincide;
use crate::math::Point2;
use crate::topology::{Shape, Winding};

/// Creates a closed shape from an ordered point list.
///
/// The closing edge from the last point back to the first is implicit; a
/// trailing point that repeats the first one is dropped.
pub struct MakeShape {
    points: Vec<Point2>,
    winding: Winding,
}

impl MakeShape {
    /// Creates a new `MakeShape` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, winding: Winding) -> Self {
        Self { points, winding }
    }

    /// Executes the operation, building the shape.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::TooFewVertices` if fewer than 3 points remain.
    pub fn execute(&self) -> Result<Shape> {
        let mut points = self.points.clone();
        if points.len() > 1 && points_coincide(&points[0], &points[points.len() - 1]) {
            points.pop();
        }
        if points.len() < 3 {
            return Err(TopologyError::TooFewVertices(points.len()).into());
        }
        Ok(Shape::from_raw(points, self.winding, false))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn reproduces_points() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(1.0, 5.0)];
        let shape = MakeShape::new(pts.clone(), Winding::CounterClockwise)
            .execute()
            .unwrap();
        assert_eq!(shape.points(), pts);
        assert_eq!(shape.segment_count(), 4);
        assert!(!shape.is_open());
    }

    #[test]
    fn drops_explicit_closing_point() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 0.0)];
        let shape = MakeShape::new(pts, Winding::CounterClockwise).execute().unwrap();
        assert_eq!(shape.vertex_count(), 3);
    }

    #[test]
    fn too_few_points() {
        let result = MakeShape::new(vec![p(0.0, 0.0), p(1.0, 0.0)], Winding::Clockwise).execute();
        assert!(result.is_err());
    }
}
