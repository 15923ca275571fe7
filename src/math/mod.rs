pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

pub use vector_2d::Vector2Ext;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for 2D affine transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default epsilon for coincidence tests on positions (loop continuity,
/// degenerate segments, point de-duplication).
pub const EPSILON: f64 = 1e-9;
