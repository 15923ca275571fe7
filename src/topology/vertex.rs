use std::cell::Cell;

use crate::math::{Point2, Vector2};

/// A vertex of a shape's loop.
///
/// The position is only writable through [`Shape`](super::Shape), which keeps
/// the cached normal of this vertex and of its adjacent segments coherent.
#[derive(Debug, Clone)]
pub struct Vertex {
    position: Point2,
    normal: Cell<Option<Vector2>>,
}

impl Vertex {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            normal: Cell::new(None),
        }
    }

    /// Returns the position of the vertex.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Writes a new position and drops the cached normal.
    ///
    /// Adjacent segment caches are handled by the owning shape.
    pub(crate) fn set_position(&mut self, position: Point2) {
        self.position = position;
        self.invalidate_normal();
    }

    pub(crate) fn cached_normal(&self) -> Option<Vector2> {
        self.normal.get()
    }

    pub(crate) fn cache_normal(&self, normal: Vector2) {
        self.normal.set(Some(normal));
    }

    pub(crate) fn invalidate_normal(&self) {
        self.normal.set(None);
    }
}

impl From<Point2> for Vertex {
    fn from(position: Point2) -> Self {
        Self::new(position)
    }
}
