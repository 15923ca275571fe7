use crate::error::{OperationError, Result};
use crate::topology::Shape;

/// Style parameters handed to a [`RenderSink`](super::RenderSink).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    stroke: Option<String>,
    fill: Option<String>,
    stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some("black".to_owned()),
            fill: None,
            stroke_width: 1.0,
        }
    }
}

impl Style {
    /// Creates a stroke-only style.
    ///
    /// # Errors
    ///
    /// Returns an error if `stroke_width` is not positive.
    pub fn new(stroke: impl Into<String>, stroke_width: f64) -> Result<Self> {
        if stroke_width <= 0.0 {
            return Err(
                OperationError::InvalidInput("stroke width must be positive".to_owned()).into(),
            );
        }
        Ok(Self {
            stroke: Some(stroke.into()),
            fill: None,
            stroke_width,
        })
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn stroke(&self) -> Option<&str> {
        self.stroke.as_deref()
    }

    #[must_use]
    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Applies a shape's color tag: it replaces the fill of closed shapes
    /// and the stroke of open paths.
    #[must_use]
    pub fn for_shape(&self, shape: &Shape) -> Self {
        let mut style = self.clone();
        if let Some(color) = shape.color() {
            if shape.is_open() {
                style.stroke = Some(color.to_owned());
            } else {
                style.fill = Some(color.to_owned());
            }
        }
        style
    }
}
