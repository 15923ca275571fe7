use super::intersect_2d::segment_ray_intersect_2d;
use super::{Point2, Vector2, TOLERANCE};

/// Maximum number of lateral nudges applied to a containment ray before
/// giving up on avoiding vertices.
const MAX_RAY_JITTERS: u32 = 8;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area-weighted centroid of a closed polygon.
///
/// Falls back to the plain vertex average when the polygon has (near) zero
/// area, and to the origin for an empty slice.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    let n = points.len();
    if n == 0 {
        return Point2::origin();
    }
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return vertex_average(points);
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let w = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * w;
        cy += (a.y + b.y) * w;
    }
    let k = 1.0 / (6.0 * area);
    Point2::new(cx * k, cy * k)
}

/// Arithmetic mean of the given points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_average(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}

/// Even-odd point containment for a closed polygon.
///
/// Casts a ray towards +X and counts crossed edges. When the ray passes
/// within `epsilon` of a vertex (measured along Y), the ray is nudged
/// laterally and re-tested, so crossings through a shared vertex are never
/// counted twice.
#[must_use]
pub fn contains_point_even_odd(points: &[Point2], point: &Point2, epsilon: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let step = epsilon.max(TOLERANCE);
    let mut origin = *point;
    for attempt in 1..=MAX_RAY_JITTERS {
        if !points.iter().any(|v| (v.y - origin.y).abs() < step) {
            break;
        }
        origin.y = point.y + step * 2.0 * f64::from(attempt);
        tracing::trace!(attempt, y = origin.y, "containment ray grazes a vertex, jittering");
    }

    let dir = Vector2::new(1.0, 0.0);
    let mut inside = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        if segment_ray_intersect_2d(a, b, &origin, &dir).is_some() {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_relative_eq!(signed_area_2d(&square()), 100.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert_relative_eq!(signed_area_2d(&pts), -100.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_is_area_weighted() {
        // Extra collinear vertices along the bottom edge must not pull the centroid down.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let c = centroid_2d(&pts);
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn centroid_of_degenerate_is_average() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(4.0, 0.0)];
        let c = centroid_2d(&pts);
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn contains_interior_and_exterior() {
        let pts = square();
        assert!(contains_point_even_odd(&pts, &Point2::new(5.0, 5.0), 1e-9));
        assert!(!contains_point_even_odd(&pts, &Point2::new(15.0, 5.0), 1e-9));
        assert!(!contains_point_even_odd(&pts, &Point2::new(-1.0, 5.0), 1e-9));
    }

    #[test]
    fn contains_with_vertex_aligned_ray() {
        // Diamond: the ray from the centre passes exactly through the right vertex.
        let pts = vec![
            Point2::new(0.0, -5.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 5.0),
            Point2::new(-5.0, 0.0),
        ];
        assert!(contains_point_even_odd(&pts, &Point2::new(0.0, 0.0), 1e-9));
        assert!(!contains_point_even_odd(&pts, &Point2::new(-6.0, 0.0), 1e-9));
    }
}
