use std::cell::Cell;

use crate::math::intersect_2d::{segment_ray_intersect_2d, segment_segment_intersect_2d};
use crate::math::vector_2d::lerp_point;
use crate::math::{Point2, Vector2, Vector2Ext, EPSILON};

use super::vertex::Vertex;
use super::winding::Winding;

/// A directed edge of a shape's loop.
///
/// Endpoints are indices into the owning shape's vertex array. The normal is
/// cached and dropped by the owning shape whenever an endpoint moves or the
/// winding changes.
#[derive(Debug, Clone)]
pub struct Segment {
    start: usize,
    end: usize,
    winding: Winding,
    normal: Cell<Option<Vector2>>,
}

impl Segment {
    /// Creates a segment between two vertex indices.
    #[must_use]
    pub fn new(start: usize, end: usize, winding: Winding) -> Self {
        Self {
            start,
            end,
            winding,
            normal: Cell::new(None),
        }
    }

    /// Index of the start vertex.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the end vertex.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub(crate) fn set_winding(&mut self, winding: Winding) {
        if self.winding != winding {
            self.winding = winding;
            self.invalidate_normal();
        }
    }

    pub(crate) fn invalidate_normal(&self) {
        self.normal.set(None);
    }
}

/// Outward normal of a directed edge for a given winding.
///
/// Counter-clockwise loops use the clockwise-rotated direction, clockwise
/// loops the counter-clockwise-rotated one.
#[must_use]
pub fn edge_normal(direction: &Vector2, winding: Winding) -> Vector2 {
    match winding {
        Winding::CounterClockwise => direction.perp_cw(),
        Winding::Clockwise => direction.perp_ccw(),
    }
}

/// Borrowed view of a segment together with the vertices it indexes.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRef<'a> {
    index: usize,
    segment: &'a Segment,
    vertices: &'a [Vertex],
}

impl<'a> SegmentRef<'a> {
    pub(crate) fn new(index: usize, segment: &'a Segment, vertices: &'a [Vertex]) -> Self {
        Self {
            index,
            segment,
            vertices,
        }
    }

    /// Position of this segment in the owning shape's loop.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn segment(&self) -> &'a Segment {
        self.segment
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.vertices[self.segment.start].position()
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.vertices[self.segment.end].position()
    }

    /// Unnormalized vector from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end() - self.start()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Unit direction from start to end (zero for a degenerate segment).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.vector().normalized_or_zero()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Point at parameter `t`, where `0` is the start and `1` the end.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        lerp_point(&self.start(), &self.end(), t)
    }

    /// Returns `true` if the segment is shorter than [`EPSILON`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPSILON
    }

    /// Outward unit normal, computed on first access and cached.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        if let Some(n) = self.segment.normal.get() {
            return n;
        }
        let n = edge_normal(&self.direction(), self.segment.winding);
        self.segment.normal.set(Some(n));
        n
    }

    /// Intersection point with another segment, if both parameters fall in `[0, 1]`.
    #[must_use]
    pub fn intersect(&self, other: &SegmentRef<'_>) -> Option<Point2> {
        segment_segment_intersect_2d(&self.start(), &self.end(), &other.start(), &other.end())
            .map(|(pt, _, _)| pt)
    }

    /// Intersection point with the ray `origin + s * direction`, `s ≥ 0`.
    #[must_use]
    pub fn intersect_ray(&self, origin: &Point2, direction: &Vector2) -> Option<Point2> {
        segment_ray_intersect_2d(&self.start(), &self.end(), origin, direction)
            .map(|(pt, _, _)| pt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn verts(points: &[(f64, f64)]) -> Vec<Vertex> {
        points
            .iter()
            .map(|&(x, y)| Vertex::new(Point2::new(x, y)))
            .collect()
    }

    #[test]
    fn normal_follows_winding() {
        let vs = verts(&[(0.0, 0.0), (10.0, 0.0)]);
        let ccw = Segment::new(0, 1, Winding::CounterClockwise);
        let cw = Segment::new(0, 1, Winding::Clockwise);
        let n_ccw = SegmentRef::new(0, &ccw, &vs).normal();
        let n_cw = SegmentRef::new(0, &cw, &vs).normal();
        assert!(n_ccw.approx_eq(&Vector2::new(0.0, -1.0), 1e-12));
        assert!(n_cw.approx_eq(&Vector2::new(0.0, 1.0), 1e-12));
    }

    #[test]
    fn set_winding_drops_cached_normal() {
        let vs = verts(&[(0.0, 0.0), (0.0, 4.0)]);
        let mut seg = Segment::new(0, 1, Winding::CounterClockwise);
        let before = SegmentRef::new(0, &seg, &vs).normal();
        seg.set_winding(Winding::Clockwise);
        let after = SegmentRef::new(0, &seg, &vs).normal();
        assert!(before.approx_eq(&(-after), 1e-12));
    }

    #[test]
    fn measures() {
        let vs = verts(&[(1.0, 1.0), (4.0, 5.0)]);
        let seg = Segment::new(0, 1, Winding::CounterClockwise);
        let r = SegmentRef::new(0, &seg, &vs);
        assert_relative_eq!(r.length(), 5.0);
        assert_relative_eq!(r.midpoint().x, 2.5);
        assert_relative_eq!(r.midpoint().y, 3.0);
        assert_relative_eq!(r.point_at(0.2).x, 1.6);
        assert!(!r.is_degenerate());
    }

    #[test]
    fn degenerate_segment() {
        let vs = verts(&[(1.0, 1.0), (1.0, 1.0)]);
        let seg = Segment::new(0, 1, Winding::CounterClockwise);
        let r = SegmentRef::new(0, &seg, &vs);
        assert!(r.is_degenerate());
        assert_eq!(r.normal(), Vector2::zeros());
    }

    #[test]
    fn intersections() {
        let vs = verts(&[(0.0, 0.0), (4.0, 4.0), (0.0, 4.0), (4.0, 0.0), (10.0, 0.0), (10.0, 1.0)]);
        let a = Segment::new(0, 1, Winding::CounterClockwise);
        let b = Segment::new(2, 3, Winding::CounterClockwise);
        let c = Segment::new(4, 5, Winding::CounterClockwise);
        let ra = SegmentRef::new(0, &a, &vs);
        let rb = SegmentRef::new(1, &b, &vs);
        let rc = SegmentRef::new(2, &c, &vs);
        let hit = ra.intersect(&rb).unwrap();
        assert_relative_eq!(hit.x, 2.0);
        assert_relative_eq!(hit.y, 2.0);
        assert!(ra.intersect(&rc).is_none());

        let ray_hit = rb
            .intersect_ray(&Point2::new(0.0, 1.0), &Vector2::new(1.0, 0.0))
            .unwrap();
        assert_relative_eq!(ray_hit.x, 3.0);
        assert!(rc
            .intersect_ray(&Point2::new(11.0, 0.5), &Vector2::new(1.0, 0.0))
            .is_none());
    }
}
