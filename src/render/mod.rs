//! Seam to the rendering collaborator.
//!
//! The engine never formats final output itself. It produces path data and
//! hands it, together with a [`Style`], to a [`RenderSink`] supplied by the
//! caller.

mod path_data;
mod style;

pub use path_data::{PathCommand, PathData};
pub use style::Style;

use crate::topology::Shape;

/// Output collaborator receiving geometry to draw.
pub trait RenderSink {
    /// Draws a path-data string with the given style.
    fn draw_path(&mut self, data: &str, style: &Style);

    /// Draws a whole shape. Defaults to its path data with the shape's color applied.
    fn draw_shape(&mut self, shape: &Shape, style: &Style) {
        self.draw_path(&shape.path_data(), &style.for_shape(shape));
    }
}

/// Sink that collects path strings in memory.
#[derive(Debug, Clone, Default)]
pub struct PathCollector {
    /// Collected `(path_data, style)` pairs in draw order.
    pub paths: Vec<(String, Style)>,
}

impl RenderSink for PathCollector {
    fn draw_path(&mut self, data: &str, style: &Style) {
        self.paths.push((data.to_owned(), style.clone()));
    }
}
