pub mod segment;
pub mod shape;
pub mod store;
pub mod vertex;
pub mod winding;

pub use segment::{Segment, SegmentRef};
pub use shape::{Shape, ShapeState};
pub use store::{ShapeId, ShapeStore};
pub use vertex::Vertex;
pub use winding::Winding;
