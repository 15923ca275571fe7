use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::topology::Shape;

/// Default miter limit: corners whose miter point lies further than
/// `4 × |distance|` from the source vertex are beveled.
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

/// Tunables for polygon offsetting.
#[derive(Debug, Clone, Copy)]
pub struct OffsetOptions {
    /// Maximum miter length as a multiple of the offset distance.
    pub miter_limit: f64,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            miter_limit: DEFAULT_MITER_LIMIT,
        }
    }
}

/// A segment translated along its own normal: an infinite line through
/// `start` with unit direction `dir`, plus the translated end point.
#[derive(Debug, Clone, Copy)]
struct OffsetLine {
    start: Point2,
    end: Point2,
    dir: Vector2,
}

/// Offsets a shape along its outward normals (inset/outset).
///
/// # Algorithm
///
/// 1. **Phase A**: Translate every segment by its own normal × distance.
/// 2. **Phase B**: For each vertex, intersect the offset lines of its previous
///    and next segment. Parallel lines fall back to the vertex normal; a miter
///    longer than `|distance| × miter_limit` is replaced by a two-point bevel.
/// 3. Rebuild a shape with the original winding and style tags.
///
/// # Sign Convention
///
/// - Positive distance: outward (along segment normals)
/// - Negative distance: inward
///
/// The source shape is never modified.
#[derive(Debug)]
pub struct OffsetShape {
    distance: f64,
    options: OffsetOptions,
}

impl OffsetShape {
    /// Creates a new offset operation with default options.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            options: OffsetOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: OffsetOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the offset, returning a new shape.
    ///
    /// Returns an unmodified clone when the distance is zero or the result
    /// would have too few points to form a shape.
    #[must_use]
    pub fn execute(&self, shape: &Shape) -> Shape {
        if self.distance.abs() < TOLERANCE {
            return shape.clone();
        }

        let lines = offset_lines(shape, self.distance);
        let points = if shape.is_open() {
            self.corners_open(shape, &lines)
        } else {
            self.corners_closed(shape, &lines)
        };

        let min_points = if shape.is_open() { 2 } else { 3 };
        if points.len() < min_points {
            tracing::debug!(
                points = points.len(),
                distance = self.distance,
                "offset produced too few points, returning source unchanged"
            );
            return shape.clone();
        }

        Shape::from_raw(points, shape.winding(), shape.is_open()).with_tags_from(shape)
    }

    /// Phase B for a closed loop: one corner per vertex, preceded by the
    /// closing segment.
    fn corners_closed(&self, shape: &Shape, lines: &[OffsetLine]) -> Vec<Point2> {
        let n = shape.vertex_count();
        if n < 3 || lines.len() != n {
            return Vec::new();
        }
        let mut raw = Vec::with_capacity(n * 2);
        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            self.push_corner(&mut raw, shape, i, &lines[prev], &lines[i]);
        }
        raw
    }

    /// Phase B for an open path: endpoints follow their single segment.
    fn corners_open(&self, shape: &Shape, lines: &[OffsetLine]) -> Vec<Point2> {
        let Some((first, last)) = lines.first().zip(lines.last()) else {
            return Vec::new();
        };
        let mut raw = Vec::with_capacity(lines.len() * 2 + 1);
        raw.push(first.start);
        for i in 1..lines.len() {
            self.push_corner(&mut raw, shape, i, &lines[i - 1], &lines[i]);
        }
        raw.push(last.end);
        raw
    }

    /// Pushes the offset corner for vertex `index`: a miter point, or two
    /// bevel points when the miter is too long.
    fn push_corner(
        &self,
        raw: &mut Vec<Point2>,
        shape: &Shape,
        index: usize,
        line_prev: &OffsetLine,
        line_next: &OffsetLine,
    ) {
        let Some(vertex) = shape.vertex(index) else {
            return;
        };
        let original = vertex.position();

        let Some((t, _)) =
            line_line_intersect_2d(&line_prev.start, &line_prev.dir, &line_next.start, &line_next.dir)
        else {
            // Parallel (or degenerate) neighbors: slide along the vertex normal.
            let normal = shape.vertex_normal(index).unwrap_or_else(Vector2::zeros);
            tracing::trace!(index, "parallel offset lines, using vertex normal");
            raw.push(original + normal * self.distance);
            return;
        };

        let corner = point_at(&line_prev.start, &line_prev.dir, t);
        let miter_length = (corner - original).norm();
        let limit = self.distance.abs() * self.options.miter_limit;

        if miter_length > limit {
            tracing::debug!(index, miter_length, limit, "miter exceeds limit, beveling");
            raw.push(line_prev.end);
            raw.push(line_next.start);
        } else {
            raw.push(corner);
        }
    }
}

/// Phase A: translates every segment by its own normal × `distance`.
fn offset_lines(shape: &Shape, distance: f64) -> Vec<OffsetLine> {
    shape
        .segments()
        .map(|seg| {
            let offset = seg.normal() * distance;
            OffsetLine {
                start: seg.start() + offset,
                end: seg.end() + offset,
                dir: seg.direction(),
            }
        })
        .collect()
}

/// Concentric offsets of one shape.
///
/// Ring `k` (1-based) is the offset of the source by `k × distance`; rings
/// are computed independently from the source so bevels do not compound.
#[derive(Debug)]
pub struct OffsetRings {
    distance: f64,
    count: usize,
    options: OffsetOptions,
}

impl OffsetRings {
    /// Creates a new ring offset operation with default options.
    #[must_use]
    pub fn new(distance: f64, count: usize) -> Self {
        Self {
            distance,
            count,
            options: OffsetOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: OffsetOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the operation, returning `count` new shapes ordered from the
    /// innermost step outward.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, shape: &Shape) -> Vec<Shape> {
        (1..=self.count)
            .map(|k| {
                OffsetShape::new(self.distance * k as f64)
                    .with_options(self.options)
                    .execute(shape)
            })
            .collect()
    }
}
