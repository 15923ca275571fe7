use crate::math::{Point2, Vector2};
use crate::topology::Shape;

use super::{pick, stride};

/// A subset of a shape's vertices.
#[derive(Debug)]
pub struct VertexSelection<'a> {
    shape: &'a mut Shape,
    indices: Vec<usize>,
}

impl<'a> VertexSelection<'a> {
    /// Selects every vertex of `shape`.
    pub fn all(shape: &'a mut Shape) -> Self {
        let indices = (0..shape.vertex_count()).collect();
        Self { shape, indices }
    }

    /// Selects the given vertex indices; out-of-range ones are dropped.
    pub fn new(shape: &'a mut Shape, indices: &[usize]) -> Self {
        let all: Vec<usize> = (0..shape.vertex_count()).collect();
        let indices = pick(&all, indices);
        Self { shape, indices }
    }

    /// Keeps every `n`-th selected vertex starting at position `offset`.
    #[must_use]
    pub fn every(mut self, n: usize, offset: usize) -> Self {
        self.indices = stride(&self.indices, n, offset);
        self
    }

    /// Keeps the selected vertices at the given positions.
    #[must_use]
    pub fn at(mut self, positions: &[usize]) -> Self {
        self.indices = pick(&self.indices, positions);
        self
    }

    /// Selected vertex indices in the parent shape.
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

    /// Positions of the selected vertices.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.indices
            .iter()
            .filter_map(|&i| self.shape.vertex(i).map(|v| v.position()))
            .collect()
    }

    /// Normals of the selected vertices.
    #[must_use]
    pub fn normals(&self) -> Vec<Vector2> {
        self.indices
            .iter()
            .filter_map(|&i| self.shape.vertex_normal(i))
            .collect()
    }

    /// Moves each selected vertex `distance` along its normal.
    ///
    /// Normals are sampled before any vertex moves, so the result does not
    /// depend on selection order.
    pub fn expand(&mut self, distance: f64) -> &mut Self {
        let targets: Vec<(usize, Point2)> = self
            .indices
            .iter()
            .filter_map(|&i| {
                let vertex = self.shape.vertex(i)?;
                let normal = self.shape.vertex_normal(i)?;
                Some((i, vertex.position() + normal * distance))
            })
            .collect();
        for (i, target) in targets {
            self.shape.place_vertex(i, target);
        }
        self.shape.invalidate_normals();
        self
    }

    /// Displaces each selected vertex by `offset`.
    pub fn translate(&mut self, offset: Vector2) -> &mut Self {
        self.map_points(|p| p + offset)
    }

    /// Replaces each selected position with `f(position)`.
    pub fn map_points(&mut self, f: impl Fn(Point2) -> Point2) -> &mut Self {
        for &i in &self.indices {
            if let Some(p) = self.shape.vertex(i).map(|v| v.position()) {
                self.shape.place_vertex(i, f(p));
            }
        }
        self
    }
}
