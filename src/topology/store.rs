use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::render::{RenderSink, Style};
use crate::selection::ShapeSelection;

use super::shape::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the shape store.
    pub struct ShapeId;
}

/// Central arena that owns a collection of shapes.
///
/// Shapes are addressed by generational IDs. Insertion order is kept
/// separately so rendering and stride selection are deterministic.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl ShapeStore {
    /// Creates a new, empty shape store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = self.shapes.insert(shape);
        self.order.push(id);
        id
    }

    /// Removes a shape, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found in the store.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape> {
        let shape = self.shapes.remove(id).ok_or(TopologyError::ShapeNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(shape)
    }

    /// Returns a reference to a shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found in the store.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape> {
        self.shapes
            .get(id)
            .ok_or_else(|| TopologyError::ShapeNotFound.into())
    }

    /// Returns a mutable reference to a shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found in the store.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.shapes
            .get_mut(id)
            .ok_or_else(|| TopologyError::ShapeNotFound.into())
    }

    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shape IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Iterates over shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.shapes.get(id).map(|s| (id, s)))
    }

    /// Selects every shape in the store.
    pub fn select(&mut self) -> ShapeSelection<'_> {
        ShapeSelection::all(self)
    }

    /// Selects the given shapes; unknown IDs are dropped.
    pub fn select_ids(&mut self, ids: &[ShapeId]) -> ShapeSelection<'_> {
        ShapeSelection::new(self, ids.to_vec())
    }

    /// Sends every concrete shape to `sink` in insertion order.
    pub fn render(&self, sink: &mut dyn RenderSink, style: &Style) {
        for (_, shape) in self.iter().filter(|(_, s)| !s.is_ephemeral()) {
            sink.draw_shape(shape, style);
        }
    }
}
