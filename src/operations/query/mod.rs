mod bounding_box;
mod is_valid;

pub use bounding_box::Aabb;
pub use is_valid::{IsValid, Violation};
