use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::{Point2, Vector2};
use crate::topology::{Shape, Winding};

/// Creates a regular polygon inscribed in a circle.
pub struct MakeRegularPolygon {
    sides: usize,
    radius: f64,
    center: Point2,
    rotation: f64,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    ///
    /// * `rotation` - Angle of the first vertex from +X, in radians.
    #[must_use]
    pub fn new(sides: usize, radius: f64, center: Point2, rotation: f64) -> Self {
        Self {
            sides,
            radius,
            center,
            rotation,
        }
    }

    /// Executes the operation, building a counter-clockwise polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `sides < 3` or `radius <= 0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Shape> {
        if self.sides < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a regular polygon needs at least 3 sides, got {}",
                self.sides
            ))
            .into());
        }
        if self.radius <= 0.0 {
            return Err(
                OperationError::InvalidInput("polygon radius must be positive".to_owned()).into(),
            );
        }
        let step = TAU / self.sides as f64;
        let points = (0..self.sides)
            .map(|i| {
                let theta = self.rotation + step * i as f64;
                self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
            })
            .collect();
        Ok(Shape::from_raw(points, Winding::CounterClockwise, false))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn hexagon() {
        let shape = MakeRegularPolygon::new(6, 2.0, Point2::new(1.0, 1.0), 0.0)
            .execute()
            .unwrap();
        assert_eq!(shape.vertex_count(), 6);
        assert!(shape.area() > 0.0);
        let c = shape.centroid();
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
        let first = shape.vertex(0).unwrap().position();
        assert_relative_eq!(first.x, 3.0, epsilon = 1e-12);
        assert!(shape.validate().is_empty());
    }

    #[test]
    fn invalid_parameters() {
        assert!(MakeRegularPolygon::new(2, 1.0, Point2::origin(), 0.0)
            .execute()
            .is_err());
        assert!(MakeRegularPolygon::new(5, 0.0, Point2::origin(), 0.0)
            .execute()
            .is_err());
    }
}
