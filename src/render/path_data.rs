use std::fmt;

use crate::math::Point2;
use crate::topology::Shape;

/// Decimal places kept when formatting coordinates.
const COORD_PRECISION: i32 = 3;

/// A single path-data command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    Close,
}

/// SVG-style path data for a shape outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Builds path data from a shape's vertex loop; closed shapes end with `Z`.
    #[must_use]
    pub fn from_shape(shape: &Shape) -> Self {
        let mut data = Self::from_points(&shape.points());
        if !shape.is_open() && !data.commands.is_empty() {
            data.commands.push(PathCommand::Close);
        }
        data
    }

    /// Builds an open polyline through `points`.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    PathCommand::MoveTo(p)
                } else {
                    PathCommand::LineTo(p)
                }
            })
            .collect();
        Self { commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", coord(p.x), coord(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", coord(p.x), coord(p.y))?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Rounds to [`COORD_PRECISION`] places; negative zero prints as `0`.
#[allow(clippy::float_cmp)]
fn coord(v: f64) -> f64 {
    let scale = 10f64.powi(COORD_PRECISION);
    let r = (v * scale).round() / scale;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::Winding;

    #[test]
    fn closed_square() {
        let s = Shape::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            Winding::CounterClockwise,
        )
        .unwrap();
        assert_eq!(s.path_data(), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    }

    #[test]
    fn open_path_has_no_close() {
        let s = Shape::open_path(&[Point2::new(0.5, -0.0), Point2::new(1.23456, 2.0)]).unwrap();
        assert_eq!(s.path_data(), "M 0.5 0 L 1.235 2");
    }

    #[test]
    fn empty_points() {
        assert!(PathData::from_points(&[]).is_empty());
        assert_eq!(PathData::from_points(&[]).to_string(), "");
    }
}
