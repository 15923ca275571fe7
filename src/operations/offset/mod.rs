mod polygon_offset;

pub use polygon_offset::{OffsetOptions, OffsetRings, OffsetShape, DEFAULT_MITER_LIMIT};
