//! 2D polygon topology and editing engine.
//!
//! Closed polygonal shapes are loops of directed segments with outward
//! normals. On top of them the crate provides affine transforms, polygon
//! offsetting with miter/bevel joins, and selection contexts that edit
//! vertex, edge and shape subsets while keeping the loop invariants intact.

pub mod error;
pub mod math;
pub mod operations;
pub mod render;
pub mod selection;
pub mod topology;

pub use error::{PolyloomError, Result};
pub use math::{Point2, Vector2, Vector2Ext};
pub use topology::{Shape, ShapeId, ShapeStore, Winding};
