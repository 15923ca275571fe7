mod make_path;
mod make_regular_polygon;
mod make_shape;

pub use make_path::MakePath;
pub use make_regular_polygon::MakeRegularPolygon;
pub use make_shape::MakeShape;
