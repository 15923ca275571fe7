use super::{Point2, Vector2, EPSILON, TOLERANCE};

/// 2D vector algebra on top of [`nalgebra::Vector2`].
///
/// `nalgebra` already supplies addition, subtraction, scaling, `dot` and
/// `norm`. This trait adds the 2D-specific operations the engine relies on:
/// scalar cross product, perpendiculars, rotation, and the permissive
/// division/normalization policy (a zero divisor yields a zero vector).
pub trait Vector2Ext: Sized {
    /// Divides by `divisor`, returning the zero vector when `divisor` is zero.
    #[must_use]
    fn safe_div(&self, divisor: f64) -> Self;

    /// Divides by `divisor`, returning `None` when `divisor` is zero.
    #[must_use]
    fn checked_div(&self, divisor: f64) -> Option<Self>;

    /// Returns the unit vector, or the zero vector if the length is below [`TOLERANCE`].
    #[must_use]
    fn normalized_or_zero(&self) -> Self;

    /// 2D cross product (z component of the 3D cross product).
    #[must_use]
    fn cross_2d(&self, other: &Self) -> f64;

    /// Angle of the vector relative to the +X axis, in radians.
    #[must_use]
    fn heading(&self) -> f64;

    /// Rotates the vector counter-clockwise by `angle` radians.
    #[must_use]
    fn rotated(&self, angle: f64) -> Self;

    /// Rotates the vector 90° clockwise: `(x, y) -> (y, -x)`.
    #[must_use]
    fn perp_cw(&self) -> Self;

    /// Rotates the vector 90° counter-clockwise: `(x, y) -> (-y, x)`.
    #[must_use]
    fn perp_ccw(&self) -> Self;

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    fn lerp_to(&self, other: &Self, t: f64) -> Self;

    /// Component-wise equality within `epsilon`.
    #[must_use]
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

impl Vector2Ext for Vector2 {
    fn safe_div(&self, divisor: f64) -> Self {
        self.checked_div(divisor).unwrap_or_else(Vector2::zeros)
    }

    #[allow(clippy::float_cmp)]
    fn checked_div(&self, divisor: f64) -> Option<Self> {
        if divisor == 0.0 {
            None
        } else {
            Some(Vector2::new(self.x / divisor, self.y / divisor))
        }
    }

    fn normalized_or_zero(&self) -> Self {
        let len = self.norm();
        if len < TOLERANCE {
            Vector2::zeros()
        } else {
            self / len
        }
    }

    fn cross_2d(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn rotated(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Vector2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    fn perp_cw(&self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    fn perp_ccw(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn lerp_to(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

/// Returns `true` if two points coincide within [`EPSILON`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    a.coords.approx_eq(&b.coords, EPSILON)
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp_point(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::from(a.coords.lerp_to(&b.coords, t))
}
