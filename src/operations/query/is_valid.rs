use std::fmt;

use crate::math::{EPSILON, TOLERANCE};
use crate::topology::{Shape, Winding};

/// A single broken shape invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A closed shape with fewer than 3 segments.
    TooFewSegments(usize),
    /// `segment[index].end` does not meet `segment[index + 1].start`.
    Discontinuity { index: usize, gap: f64 },
    /// Segment shorter than the coincidence epsilon.
    DegenerateSegment { index: usize },
    /// Winding tag disagrees with the sign of the shoelace area.
    WindingMismatch { winding: Winding, area: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments(n) => write!(f, "closed shape has only {n} segments"),
            Self::Discontinuity { index, gap } => {
                write!(f, "loop breaks after segment {index} (gap {gap})")
            }
            Self::DegenerateSegment { index } => write!(f, "segment {index} has zero length"),
            Self::WindingMismatch { winding, area } => {
                write!(f, "winding {winding:?} disagrees with signed area {area}")
            }
        }
    }
}

/// Validates the topological and geometric consistency of a shape.
pub struct IsValid<'a> {
    shape: &'a Shape,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the validation, returning `true` if the shape is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.violations().is_empty()
    }

    /// Lists every violation found; empty for a valid shape.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        let shape = self.shape;
        let mut found = Vec::new();
        let n = shape.segment_count();

        if !shape.is_open() && n < 3 {
            found.push(Violation::TooFewSegments(n));
        }

        let pairs = if shape.is_open() { n.saturating_sub(1) } else { n };
        for i in 0..pairs {
            let (Some(a), Some(b)) = (shape.segment(i), shape.segment((i + 1) % n)) else {
                continue;
            };
            let gap = (a.end() - b.start()).norm();
            if gap > EPSILON {
                found.push(Violation::Discontinuity { index: i, gap });
            }
        }

        for seg in shape.segments() {
            if seg.is_degenerate() {
                found.push(Violation::DegenerateSegment { index: seg.index() });
            }
        }

        if !shape.is_open() {
            let area = shape.area();
            if area.abs() > TOLERANCE && Winding::from_signed_area(area) != shape.winding() {
                found.push(Violation::WindingMismatch {
                    winding: shape.winding(),
                    area,
                });
            }
        }

        if !found.is_empty() {
            tracing::debug!(count = found.len(), "shape has invariant violations");
        }
        found
    }
}
