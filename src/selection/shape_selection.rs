use crate::math::{Point2, Vector2};
use crate::topology::{Shape, ShapeId, ShapeStore};

use super::{pick, stride};

/// A subset of the shapes in a [`ShapeStore`].
///
/// Operations that derive new geometry add it to the store and return the
/// new IDs; the selection itself keeps pointing at the sources.
#[derive(Debug)]
pub struct ShapeSelection<'a> {
    store: &'a mut ShapeStore,
    ids: Vec<ShapeId>,
}

impl<'a> ShapeSelection<'a> {
    /// Selects every shape in insertion order.
    pub fn all(store: &'a mut ShapeStore) -> Self {
        let ids = store.ids().to_vec();
        Self { store, ids }
    }

    /// Selects the given shapes; IDs not present in the store are dropped.
    pub fn new(store: &'a mut ShapeStore, ids: Vec<ShapeId>) -> Self {
        let mut kept: Vec<ShapeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if store.contains(id) && !kept.contains(&id) {
                kept.push(id);
            }
        }
        Self { store, ids: kept }
    }

    /// Keeps every `n`-th selected shape starting at position `offset`.
    #[must_use]
    pub fn every(mut self, n: usize, offset: usize) -> Self {
        self.ids = stride(&self.ids, n, offset);
        self
    }

    /// Keeps the selected shapes at the given positions.
    #[must_use]
    pub fn at(mut self, positions: &[usize]) -> Self {
        self.ids = pick(&self.ids, positions);
        self
    }

    #[must_use]
    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the selected shapes.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.ids.iter().filter_map(|&id| self.store.shape(id).ok())
    }

    /// Applies `f` to every selected shape.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Shape)) -> &mut Self {
        for &id in &self.ids {
            if let Ok(shape) = self.store.shape_mut(id) {
                f(shape);
            }
        }
        self
    }

    pub fn translate(&mut self, offset: Vector2) -> &mut Self {
        self.for_each_mut(|s| {
            s.translate(offset);
        })
    }

    /// Scales each shape about `origin`, or about its own centroid when `None`.
    pub fn scale(&mut self, factor: f64, origin: Option<Point2>) -> &mut Self {
        self.for_each_mut(|s| {
            s.scale(factor, origin);
        })
    }

    /// Rotates each shape about `origin`, or about its own centroid when `None`.
    pub fn rotate(&mut self, angle: f64, origin: Option<Point2>) -> &mut Self {
        self.for_each_mut(|s| {
            s.rotate(angle, origin);
        })
    }

    pub fn trace(&mut self) -> &mut Self {
        self.for_each_mut(|s| {
            s.trace();
        })
    }

    pub fn mark_ephemeral(&mut self) -> &mut Self {
        self.for_each_mut(|s| {
            s.mark_ephemeral();
        })
    }

    /// Offsets every selected shape and adds the results to the store.
    /// Sources are left as they are.
    pub fn offset(&mut self, distance: f64) -> Vec<ShapeId> {
        let derived: Vec<Shape> = self.shapes().map(|s| s.offset(distance)).collect();
        self.insert_all(derived)
    }

    /// Adds `count` concentric offsets of every selected shape to the store.
    pub fn offset_rings(&mut self, distance: f64, count: usize) -> Vec<ShapeId> {
        let derived: Vec<Shape> = self
            .shapes()
            .flat_map(|s| s.offset_rings(distance, count))
            .collect();
        self.insert_all(derived)
    }

    /// Replaces each shape with its bounding rectangle.
    pub fn bounding_boxes(&mut self) -> Vec<ShapeId> {
        let derived = self.derive(|s| vec![s.bounding_box_shape()]);
        self.insert_all(derived)
    }

    /// Replaces each shape with one open path per segment.
    pub fn explode(&mut self) -> Vec<ShapeId> {
        let derived = self.derive(Shape::explode);
        self.insert_all(derived)
    }

    /// Returns each shape's centroid and marks the shapes ephemeral.
    pub fn collapse_to_centroids(&mut self) -> Vec<Point2> {
        let mut centroids = Vec::with_capacity(self.ids.len());
        self.for_each_mut(|s| centroids.push(s.collapse_to_centroid()));
        centroids
    }

    /// Places a copy of every selected shape centred on each target point.
    ///
    /// Copies are ordered target-major. Sources become ephemeral, even when
    /// `targets` is empty.
    pub fn place_at(&mut self, targets: &[Point2]) -> Vec<ShapeId> {
        let derived = self.derive(|s| {
            let copies: Vec<Shape> = targets.iter().map(|&t| s.clone_for_placement(t)).collect();
            s.mark_ephemeral();
            copies
        });
        let per_round = targets.len();
        let ordered: Vec<Shape> = (0..per_round)
            .flat_map(|t| derived.iter().skip(t).step_by(per_round))
            .cloned()
            .collect();
        tracing::debug!(
            sources = self.ids.len(),
            targets = targets.len(),
            "placed shape copies"
        );
        self.insert_all(ordered)
    }

    fn derive(&mut self, mut f: impl FnMut(&mut Shape) -> Vec<Shape>) -> Vec<Shape> {
        let mut derived = Vec::new();
        self.for_each_mut(|s| derived.extend(f(s)));
        derived
    }

    fn insert_all(&mut self, shapes: Vec<Shape>) -> Vec<ShapeId> {
        shapes.into_iter().map(|s| self.store.add(s)).collect()
    }
}
