use crate::math::{Matrix3, Vector2};
use crate::topology::Shape;

use super::GeneralTransform;

/// Translates a shape by a displacement vector.
pub struct Translate {
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector2) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the shape in-place.
    pub fn execute(&self, shape: &mut Shape) {
        GeneralTransform::new(Matrix3::new_translation(&self.displacement)).execute(shape);
    }
}
