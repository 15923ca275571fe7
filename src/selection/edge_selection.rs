use crate::error::{OperationError, Result};
use crate::math::vector_2d::points_coincide;
use crate::math::{Point2, Vector2};
use crate::topology::{SegmentRef, Shape};

use super::{pick, stride};

/// A subset of a shape's edges (segments).
#[derive(Debug)]
pub struct EdgeSelection<'a> {
    shape: &'a mut Shape,
    indices: Vec<usize>,
}

impl<'a> EdgeSelection<'a> {
    /// Selects every edge of `shape`.
    pub fn all(shape: &'a mut Shape) -> Self {
        let indices = (0..shape.segment_count()).collect();
        Self { shape, indices }
    }

    /// Selects the given edge indices; out-of-range ones are dropped.
    pub fn new(shape: &'a mut Shape, indices: &[usize]) -> Self {
        let all: Vec<usize> = (0..shape.segment_count()).collect();
        let indices = pick(&all, indices);
        Self { shape, indices }
    }

    /// Keeps every `n`-th selected edge starting at position `offset`.
    #[must_use]
    pub fn every(mut self, n: usize, offset: usize) -> Self {
        self.indices = stride(&self.indices, n, offset);
        self
    }

    /// Keeps the selected edges at the given positions.
    #[must_use]
    pub fn at(mut self, positions: &[usize]) -> Self {
        self.indices = pick(&self.indices, positions);
        self
    }

    /// Selected segment indices in the parent shape.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        self.shape
    }

    fn selected(&self) -> impl Iterator<Item = SegmentRef<'_>> + '_ {
        self.indices.iter().filter_map(|&i| self.shape.segment(i))
    }

    /// Midpoints of the selected edges. Does not modify the shape.
    #[must_use]
    pub fn midpoints(&self) -> Vec<Point2> {
        self.selected().map(|s| s.midpoint()).collect()
    }

    /// Splits each selected edge into `parts` equal pieces and returns the
    /// `parts - 1` interior points per edge. Does not modify the shape.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn divide(&self, parts: usize) -> Vec<Point2> {
        if parts < 2 {
            return Vec::new();
        }
        self.selected()
            .flat_map(|seg| (1..parts).map(move |k| seg.point_at(k as f64 / parts as f64)))
            .collect()
    }

    /// Pushes each selected edge out along its normal by `distance`,
    /// inserting two new vertices per edge.
    ///
    /// The parent loop is rewritten wholesale; consecutive coincident points
    /// are merged. Afterwards the selection refers to the extruded cap edges.
    pub fn extrude(&mut self, distance: f64) -> &mut Self {
        let n = self.shape.vertex_count();
        let mut caps = vec![false; self.shape.segment_count()];
        for &i in &self.indices {
            caps[i] = true;
        }

        // (point, whether the segment leaving this point is a cap)
        let mut rebuilt: Vec<(Point2, bool)> = Vec::with_capacity(n + 2 * self.indices.len());
        for i in 0..n {
            let Some(vertex) = self.shape.vertex(i) else {
                continue;
            };
            rebuilt.push((vertex.position(), false));
            if let Some(seg) = caps
                .get(i)
                .copied()
                .unwrap_or(false)
                .then(|| self.shape.segment(i))
                .flatten()
            {
                let offset = seg.normal() * distance;
                rebuilt.push((seg.start() + offset, true));
                rebuilt.push((seg.end() + offset, false));
            }
        }

        let rebuilt = merge_coincident(rebuilt, !self.shape.is_open());
        let (points, flags): (Vec<Point2>, Vec<bool>) = rebuilt.into_iter().unzip();
        self.shape.replace_points(points);
        self.indices = flags
            .iter()
            .enumerate()
            .filter_map(|(i, &cap)| cap.then_some(i))
            .collect();
        self
    }

    /// Collapses each selected edge: its endpoints merge into its midpoint,
    /// the edge disappears, and the loop is reconnected. A run of adjacent
    /// selected edges collapses into the mean of their midpoints.
    ///
    /// Returns the midpoints of the collapsed edges. Afterwards the
    /// selection is empty.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` (leaving the shape unchanged)
    /// if the result would have fewer than 3 vertices (2 for an open path).
    pub fn collapse(&mut self) -> Result<Vec<Point2>> {
        let midpoints = self.midpoints();
        if self.indices.is_empty() {
            return Ok(midpoints);
        }

        let n = self.shape.vertex_count();
        let m = self.shape.segment_count();
        let mut selected = vec![false; m];
        for &i in &self.indices {
            selected[i] = true;
        }

        // Group vertices joined by selected edges, walking the loop.
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..n {
            match groups.last_mut() {
                Some(group) if i > 0 && selected[i - 1] => group.push(i),
                _ => groups.push(vec![i]),
            }
        }
        let wraps = !self.shape.is_open() && m == n && selected[m - 1];
        if wraps && groups.len() > 1 {
            if let Some(mut last) = groups.pop() {
                last.append(&mut groups[0]);
                groups[0] = last;
            }
        }

        let min_vertices = if self.shape.is_open() { 2 } else { 3 };
        if groups.len() < min_vertices {
            tracing::debug!(
                remaining = groups.len(),
                "collapse would break the loop, leaving shape unchanged"
            );
            return Err(OperationError::Failed(format!(
                "collapsing {} edges would leave {} vertices",
                self.indices.len(),
                groups.len()
            ))
            .into());
        }

        let points: Vec<Point2> = groups
            .iter()
            .filter_map(|group| self.merged_point(group, &selected))
            .collect();
        tracing::debug!(collapsed = midpoints.len(), vertices = points.len(), "collapsed edges");
        self.shape.replace_points(points);
        self.indices.clear();
        Ok(midpoints)
    }

    /// The single point a vertex group collapses to.
    #[allow(clippy::cast_precision_loss)]
    fn merged_point(&self, group: &[usize], selected: &[bool]) -> Option<Point2> {
        let mids: Vec<Point2> = group
            .iter()
            .filter(|&&v| selected.get(v).copied().unwrap_or(false))
            .filter_map(|&v| self.shape.segment(v).map(|s| s.midpoint()))
            .collect();
        if mids.is_empty() {
            return group
                .first()
                .and_then(|&v| self.shape.vertex(v))
                .map(|v| v.position());
        }
        let sum = mids.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
        Some(Point2::from(sum / mids.len() as f64))
    }
}

/// Drops points that coincide with their predecessor (and, for closed loops,
/// a last point coinciding with the first). A dropped point's cap flag moves
/// to the point kept in its place.
fn merge_coincident(points: Vec<(Point2, bool)>, closed: bool) -> Vec<(Point2, bool)> {
    let mut merged: Vec<(Point2, bool)> = Vec::with_capacity(points.len());
    for (p, cap) in points {
        match merged.last_mut() {
            Some((last, last_cap)) if points_coincide(last, &p) => *last_cap |= cap,
            _ => merged.push((p, cap)),
        }
    }
    if closed {
        while merged.len() > 1 && points_coincide(&merged[0].0, &merged[merged.len() - 1].0) {
            if let Some((_, cap)) = merged.pop() {
                if let Some((_, prev_cap)) = merged.last_mut() {
                    *prev_cap |= cap;
                }
            }
        }
    }
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::topology::Winding;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Shape {
        Shape::from_points(
            &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
            Winding::CounterClockwise,
        )
        .unwrap()
    }

    #[test]
    fn midpoints_and_divide_are_read_only() {
        let mut s = square();
        let before = s.points();
        let sel = s.select_edges().at(&[0, 2]);
        let mids = sel.midpoints();
        assert_eq!(mids, vec![p(5.0, 0.0), p(5.0, 10.0)]);
        let pts = sel.divide(4);
        assert_eq!(pts.len(), 6);
        assert_relative_eq!(pts[0].x, 2.5);
        assert_relative_eq!(pts[2].x, 7.5);
        assert!(sel.divide(1).is_empty());
        assert_eq!(s.points(), before);
    }

    #[test]
    fn extrude_single_edge() {
        let mut s = square();
        let mut sel = s.select_edges().at(&[0]);
        sel.extrude(2.0);
        assert_eq!(sel.indices(), &[1]);
        assert_eq!(s.vertex_count(), 6);
        assert_eq!(s.winding(), Winding::CounterClockwise);
        assert_eq!(
            s.points(),
            vec![p(0.0, 0.0), p(0.0, -2.0), p(10.0, -2.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
        );
        assert_relative_eq!(s.area(), 120.0, epsilon = 1e-9);
        assert!(s.validate().is_empty());
    }

    #[test]
    fn extrude_closing_edge() {
        let mut s = square();
        s.select_edges().at(&[3]).extrude(1.0);
        assert_eq!(s.vertex_count(), 6);
        assert_relative_eq!(s.area(), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn extrude_by_zero_merges_back() {
        let mut s = square();
        let mut sel = s.select_edges().every(2, 0);
        sel.extrude(0.0);
        assert_eq!(sel.indices(), &[0, 2]);
        assert_eq!(s.vertex_count(), 4);
    }

    #[test]
    fn collapse_single_edge() {
        let mut s = square();
        let mids = s.select_edges().at(&[0]).collapse().unwrap();
        assert_eq!(mids, vec![p(5.0, 0.0)]);
        assert_eq!(s.points(), vec![p(5.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        assert!(s.validate().is_empty());
    }

    #[test]
    fn collapse_wrapping_edge() {
        let mut s = Shape::regular(6, 1.0, Point2::origin(), 0.0).unwrap();
        s.select_edges().at(&[5]).collapse().unwrap();
        assert_eq!(s.vertex_count(), 5);
        assert!(s.validate().is_empty());
    }

    #[test]
    fn collapse_adjacent_run() {
        let mut s = Shape::regular(6, 1.0, Point2::origin(), 0.0).unwrap();
        s.select_edges().at(&[0, 1]).collapse().unwrap();
        assert_eq!(s.vertex_count(), 4);
    }

    #[test]
    fn collapse_refuses_to_break_loop() {
        let mut s = square();
        let before = s.points();
        assert!(s.select_edges().every(1, 0).collapse().is_err());
        assert!(s.select_edges().at(&[0, 1]).collapse().is_err());
        assert_eq!(s.points(), before);
    }
}
