use super::{Point2, Vector2, Vector2Ext, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the directions alone (the sine of the angle
/// between them), so the result does not depend on the lengths of `d1`, `d2`.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.cross_2d(d2);
    if cross.abs() <= TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }
    let delta = p2 - p1;
    let t = delta.cross_2d(d2) / cross;
    let u = delta.cross_2d(d1) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t_clamped), t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of the segment `a0 → a1` with the ray `origin + s * dir`, `s ≥ 0`.
///
/// Returns `(intersection_point, t, s)` where `t` is the segment parameter in
/// `[0, 1]` and `s` the (unbounded above) ray parameter.
#[must_use]
pub fn segment_ray_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    origin: &Point2,
    dir: &Vector2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let (t, s) = line_line_intersect_2d(a0, &da, origin, dir)?;

    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && s >= -eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t_clamped), t_clamped, s.max(0.0)))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_line_basic() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(2.0, -1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(t, 2.0);
        assert_relative_eq!(u, 1.0);
    }

    #[test]
    fn line_line_parallel() {
        let r = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 1.0),
            &p(0.0, 1.0),
            &Vector2::new(2.0, 2.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn short_perpendicular_lines_intersect() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(5e-6, 0.0),
            &p(5e-6, -5e-6),
            &Vector2::new(0.0, 5e-6),
        )
        .unwrap();
        assert_relative_eq!(t, 1.0, epsilon = 1e-12);
        assert_relative_eq!(u, 1.0, epsilon = 1e-12);

        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(4e-6, 4e-6), &p(0.0, 4e-6), &p(4e-6, 0.0))
            .unwrap();
        assert_relative_eq!(hit.0.x, 2e-6, epsilon = 1e-18);
        let ray = segment_ray_intersect_2d(&p(1e-6, -1e-6), &p(1e-6, 1e-6), &p(0.0, 0.0), &Vector2::new(1e-6, 0.0))
            .unwrap();
        assert_relative_eq!(ray.1, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_direction_is_parallel() {
        let r = line_line_intersect_2d(&p(0.0, 0.0), &Vector2::zeros(), &p(1.0, 0.0), &Vector2::new(0.0, 1.0));
        assert!(r.is_none());
    }

    #[test]
    fn segment_segment_crossing() {
        let (pt, t, u) =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0))
                .unwrap();
        assert_relative_eq!(pt.x, 1.0);
        assert_relative_eq!(pt.y, 1.0);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(u, 0.5);
    }

    #[test]
    fn segment_segment_out_of_range() {
        let r = segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, -1.0), &p(2.0, 1.0));
        assert!(r.is_none());
    }

    #[test]
    fn segment_ray_hits_far_segment() {
        let (pt, t, s) = segment_ray_intersect_2d(
            &p(100.0, -1.0),
            &p(100.0, 1.0),
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(pt.x, 100.0);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(s, 100.0);
    }

    #[test]
    fn segment_ray_behind_origin() {
        let r = segment_ray_intersect_2d(
            &p(-5.0, -1.0),
            &p(-5.0, 1.0),
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
        );
        assert!(r.is_none());
    }
}
