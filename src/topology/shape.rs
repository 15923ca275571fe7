use crate::error::{Result, TopologyError};
use crate::math::polygon_2d::{centroid_2d, contains_point_even_odd, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::operations::creation::{MakePath, MakeRegularPolygon, MakeShape};
use crate::operations::offset::{OffsetOptions, OffsetRings, OffsetShape};
use crate::operations::query::{Aabb, IsValid, Violation};
use crate::operations::transform::{Mirror, Rotate, Scale, Translate};
use crate::render::PathData;
use crate::selection::{EdgeSelection, VertexSelection};

use super::segment::{Segment, SegmentRef};
use super::vertex::Vertex;
use super::winding::Winding;

/// Lifecycle state of a shape.
///
/// Ephemeral shapes are construction-only geometry: they stay editable but
/// are skipped by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeState {
    #[default]
    Concrete,
    Ephemeral,
}

/// A polygonal loop (or open path) of segments over an owned vertex array.
///
/// Segment `i` runs from vertex `i` to vertex `(i + 1) mod n`. For open paths
/// the closing segment is omitted. Every write to a vertex position goes
/// through a method of this type so cached normals never go stale.
#[derive(Debug, Clone)]
pub struct Shape {
    vertices: Vec<Vertex>,
    segments: Vec<Segment>,
    winding: Winding,
    state: ShapeState,
    group: Option<String>,
    color: Option<String>,
    open: bool,
}

impl Shape {
    /// Builds a closed shape from an ordered point list.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::TooFewVertices` if fewer than 3 distinct points remain.
    pub fn from_points(points: &[Point2], winding: Winding) -> Result<Self> {
        MakeShape::new(points.to_vec(), winding).execute()
    }

    /// Builds a regular polygon with `sides` vertices on a circle.
    ///
    /// `rotation` (radians) offsets the angle of the first vertex from +X.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides < 3` or `radius` is not positive.
    pub fn regular(sides: usize, radius: f64, center: Point2, rotation: f64) -> Result<Self> {
        MakeRegularPolygon::new(sides, radius, center, rotation).execute()
    }

    /// Builds an open path through the given points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are given.
    pub fn open_path(points: &[Point2]) -> Result<Self> {
        MakePath::new(points.to_vec()).execute()
    }

    /// Assembles a shape without validating the point count.
    pub(crate) fn from_raw(points: Vec<Point2>, winding: Winding, open: bool) -> Self {
        let mut shape = Self {
            vertices: points.into_iter().map(Vertex::new).collect(),
            segments: Vec::new(),
            winding,
            state: ShapeState::Concrete,
            group: None,
            color: None,
            open,
        };
        shape.connect_segments();
        shape
    }

    // --- Structure ---

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex positions in loop order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices.iter().map(Vertex::position).collect()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<SegmentRef<'_>> {
        self.segments
            .get(index)
            .map(|s| SegmentRef::new(index, s, &self.vertices))
    }

    /// Iterates over the segments in loop order.
    pub fn segments(&self) -> impl Iterator<Item = SegmentRef<'_>> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| SegmentRef::new(i, s, &self.vertices))
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the segment ending at vertex `index`.
    #[must_use]
    pub fn prev_segment_index(&self, index: usize) -> Option<usize> {
        let m = self.segments.len();
        if m == 0 || index >= self.vertices.len() {
            return None;
        }
        if self.open {
            index.checked_sub(1)
        } else {
            Some((index + m - 1) % m)
        }
    }

    /// Index of the segment starting at vertex `index`.
    #[must_use]
    pub fn next_segment_index(&self, index: usize) -> Option<usize> {
        (index < self.segments.len()).then_some(index)
    }

    /// Rebuilds the segment array from the vertex order.
    ///
    /// Must run after the vertex array is replaced wholesale. Drops every
    /// cached normal.
    pub fn connect_segments(&mut self) {
        let n = self.vertices.len();
        let count = match (self.open, n) {
            (_, 0 | 1) => 0,
            (true, _) => n - 1,
            (false, _) => n,
        };
        self.segments = (0..count)
            .map(|i| Segment::new(i, (i + 1) % n, self.winding))
            .collect();
        for v in &self.vertices {
            v.invalidate_normal();
        }
    }

    /// Replaces all vertex positions and reconnects the loop.
    pub(crate) fn replace_points(&mut self, points: Vec<Point2>) {
        self.vertices = points.into_iter().map(Vertex::new).collect();
        self.connect_segments();
    }

    // --- Normals ---

    /// Outward normal at a vertex: the normalized sum of the adjacent
    /// segment normals, cached until the vertex or a neighbor moves.
    ///
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn vertex_normal(&self, index: usize) -> Option<Vector2> {
        let vertex = self.vertices.get(index)?;
        if let Some(n) = vertex.cached_normal() {
            return Some(n);
        }
        let prev = self
            .prev_segment_index(index)
            .and_then(|s| self.segment(s))
            .map(|s| s.normal());
        let next = self
            .next_segment_index(index)
            .and_then(|s| self.segment(s))
            .map(|s| s.normal());
        let normal = match (prev, next) {
            (Some(a), Some(b)) => {
                let sum = a + b;
                if sum.norm() < TOLERANCE {
                    // Antiparallel neighbors cancel out.
                    a
                } else {
                    sum.normalize()
                }
            }
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => Vector2::zeros(),
        };
        vertex.cache_normal(normal);
        Some(normal)
    }

    /// Drops every cached vertex and segment normal.
    pub fn invalidate_normals(&self) {
        for s in &self.segments {
            s.invalidate_normal();
        }
        for v in &self.vertices {
            v.invalidate_normal();
        }
    }

    fn invalidate_segment(&self, index: usize) {
        if let Some(seg) = self.segments.get(index) {
            seg.invalidate_normal();
            self.vertices[seg.start()].invalidate_normal();
            self.vertices[seg.end()].invalidate_normal();
        }
    }

    // --- Vertex mutation ---

    /// Moves a vertex, invalidating its normal and both adjacent segments.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IndexOutOfRange` for an unknown vertex.
    pub fn set_vertex_position(&mut self, index: usize, position: Point2) -> Result<()> {
        let len = self.vertices.len();
        if index >= len {
            return Err(TopologyError::IndexOutOfRange { index, len }.into());
        }
        self.place_vertex(index, position);
        Ok(())
    }

    /// Moves a vertex known to be in range. Out-of-range indices are a no-op.
    pub(crate) fn place_vertex(&mut self, index: usize, position: Point2) {
        let Some(vertex) = self.vertices.get_mut(index) else {
            return;
        };
        vertex.set_position(position);
        if let Some(s) = self.prev_segment_index(index) {
            self.invalidate_segment(s);
        }
        if let Some(s) = self.next_segment_index(index) {
            self.invalidate_segment(s);
        }
    }

    /// Displaces a vertex by `offset`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IndexOutOfRange` for an unknown vertex.
    pub fn translate_vertex(&mut self, index: usize, offset: Vector2) -> Result<()> {
        let len = self.vertices.len();
        let current = self
            .vertices
            .get(index)
            .ok_or(TopologyError::IndexOutOfRange { index, len })?
            .position();
        self.set_vertex_position(index, current + offset)
    }

    /// Displaces a vertex by `distance` along its current normal.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IndexOutOfRange` for an unknown vertex.
    pub fn move_vertex_along_normal(&mut self, index: usize, distance: f64) -> Result<()> {
        let len = self.vertices.len();
        let normal = self
            .vertex_normal(index)
            .ok_or(TopologyError::IndexOutOfRange { index, len })?;
        self.translate_vertex(index, normal * distance)
    }

    // --- Measures ---

    /// Signed shoelace area; positive for counter-clockwise loops, zero for open paths.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.open {
            return 0.0;
        }
        signed_area_2d(&self.points())
    }

    /// Area-weighted centroid.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        centroid_2d(&self.points())
    }

    /// Sum of all segment lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.points())
    }

    /// Even-odd containment test; open paths contain nothing.
    #[must_use]
    pub fn contains_point(&self, point: &Point2, epsilon: f64) -> bool {
        !self.open && contains_point_even_odd(&self.points(), point, epsilon)
    }

    /// Lists every invariant violation. Never fails.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        IsValid::new(self).violations()
    }

    // --- Orientation ---

    /// Reverses the loop order and flips the winding tag.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
        self.connect_segments();
        self.set_winding(self.winding.reversed());
    }

    /// Reverses the loop if its winding differs from `winding`.
    pub fn orient(&mut self, winding: Winding) {
        if self.winding != winding {
            self.reverse();
        }
    }

    /// Re-tags every segment with the shape's winding.
    pub(crate) fn set_winding(&mut self, winding: Winding) {
        self.winding = winding;
        for seg in &mut self.segments {
            seg.set_winding(winding);
        }
        for v in &self.vertices {
            v.invalidate_normal();
        }
    }

    /// Removes zero-length segments by dropping the vertex that repeats its
    /// predecessor. Returns the number of vertices removed.
    pub fn remove_degenerate(&mut self, epsilon: f64) -> usize {
        let points = self.points();
        let n = points.len();
        let mut kept: Vec<Point2> = Vec::with_capacity(n);
        for p in points {
            if kept.last().is_some_and(|last| (p - last).norm() < epsilon) {
                continue;
            }
            kept.push(p);
        }
        if !self.open {
            while kept.len() > 1 && (kept[kept.len() - 1] - kept[0]).norm() < epsilon {
                kept.pop();
            }
        }
        let removed = n - kept.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = kept.len(), "removed degenerate segments");
            self.replace_points(kept);
        }
        removed
    }

    // --- Transforms ---

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector2) -> &mut Self {
        Translate::new(offset).execute(self);
        self
    }

    /// Translates the shape so its centroid lands on `target`.
    pub fn move_to(&mut self, target: Point2) -> &mut Self {
        let offset = target - self.centroid();
        self.translate(offset)
    }

    /// Uniform scale about `origin` (centroid when `None`).
    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) -> &mut Self {
        self.scale_xy(factor, factor, origin)
    }

    /// Non-uniform scale about `origin` (centroid when `None`).
    pub fn scale_xy(&mut self, sx: f64, sy: f64, origin: Option<Point2>) -> &mut Self {
        let origin = origin.unwrap_or_else(|| self.centroid());
        Scale::new(origin, sx, sy).execute(self);
        self
    }

    /// Counter-clockwise rotation by `angle` radians about `origin` (centroid when `None`).
    pub fn rotate(&mut self, angle: f64, origin: Option<Point2>) -> &mut Self {
        let origin = origin.unwrap_or_else(|| self.centroid());
        Rotate::new(origin, angle).execute(self);
        self
    }

    /// Reflects the shape across the line through `axis_origin` along `axis_direction`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the axis direction is zero-length.
    pub fn mirror(&mut self, axis_origin: Point2, axis_direction: Vector2) -> Result<&mut Self> {
        Mirror::new(axis_origin, axis_direction).execute(self)?;
        Ok(self)
    }

    /// Writes transformed positions for every vertex, then drops all caches.
    pub(crate) fn map_positions(&mut self, f: impl Fn(Point2) -> Point2) {
        for v in &mut self.vertices {
            let p = f(v.position());
            v.set_position(p);
        }
        self.invalidate_normals();
    }

    /// Reverses vertex order while keeping the winding tag, used after an
    /// orientation-flipping transform.
    pub(crate) fn reverse_order_keep_winding(&mut self) {
        self.vertices.reverse();
        self.connect_segments();
    }

    // --- Offsetting ---

    /// Offsets outward by `distance` (inward when negative) with default options.
    #[must_use]
    pub fn offset(&self, distance: f64) -> Shape {
        OffsetShape::new(distance).execute(self)
    }

    /// Offsets with explicit options.
    #[must_use]
    pub fn offset_with(&self, distance: f64, options: OffsetOptions) -> Shape {
        OffsetShape::new(distance).with_options(options).execute(self)
    }

    /// Concentric offsets at `distance`, `2 * distance`, … (`count` shapes).
    #[must_use]
    pub fn offset_rings(&self, distance: f64, count: usize) -> Vec<Shape> {
        OffsetRings::new(distance, count).execute(self)
    }

    // --- Selection ---

    /// Selects every vertex for editing.
    pub fn select_vertices(&mut self) -> VertexSelection<'_> {
        VertexSelection::all(self)
    }

    /// Selects every edge for editing.
    pub fn select_edges(&mut self) -> EdgeSelection<'_> {
        EdgeSelection::all(self)
    }

    // --- Lifecycle ---

    #[must_use]
    pub fn state(&self) -> ShapeState {
        self.state
    }

    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.state == ShapeState::Ephemeral
    }

    /// Makes the shape concrete so renderers draw it.
    pub fn trace(&mut self) -> &mut Self {
        if self.state != ShapeState::Concrete {
            tracing::trace!("shape traced");
            self.state = ShapeState::Concrete;
        }
        self
    }

    /// Marks the shape as construction-only geometry.
    pub fn mark_ephemeral(&mut self) -> &mut Self {
        if self.state != ShapeState::Ephemeral {
            tracing::trace!("shape marked ephemeral");
            self.state = ShapeState::Ephemeral;
        }
        self
    }

    /// Returns the bounding rectangle as a new concrete shape and marks `self` ephemeral.
    pub fn bounding_box_shape(&mut self) -> Shape {
        let rect = self.bounding_box().to_shape();
        self.mark_ephemeral();
        rect.with_tags_from(self)
    }

    /// Splits the loop into one open two-point path per segment and marks
    /// `self` ephemeral.
    pub fn explode(&mut self) -> Vec<Shape> {
        let parts: Vec<Shape> = self
            .segments()
            .map(|s| Shape::from_raw(vec![s.start(), s.end()], self.winding, true).with_tags_from(self))
            .collect();
        self.mark_ephemeral();
        parts
    }

    /// Returns the centroid and marks `self` ephemeral.
    pub fn collapse_to_centroid(&mut self) -> Point2 {
        let c = self.centroid();
        self.mark_ephemeral();
        c
    }

    /// Returns a concrete copy centred on `target` and marks `self` ephemeral.
    pub fn clone_for_placement(&mut self, target: Point2) -> Shape {
        let mut copy = self.clone();
        copy.trace();
        copy.move_to(target);
        self.mark_ephemeral();
        copy
    }

    // --- Style tags ---

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = Some(group.into());
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.set_group(group);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.set_color(color);
        self
    }

    /// Copies group and color tags from `source`.
    pub(crate) fn with_tags_from(mut self, source: &Shape) -> Self {
        self.group.clone_from(&source.group);
        self.color.clone_from(&source.color);
        self
    }

    // --- Output ---

    /// SVG-style path data (`M x y L x y … Z`).
    #[must_use]
    pub fn path_data(&self) -> String {
        PathData::from_shape(self).to_string()
    }
}
