use serde::{Deserialize, Serialize};

use crate::core::CanvasSize;
use crate::error::{SparkChartError, SparkChartResult};
use crate::render::{LinePrimitive, Primitive, RectPrimitive, TrianglePrimitive};

/// Backend-agnostic scene for one chart.
///
/// Primitives are kept in paint order: later entries draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: CanvasSize,
    pub accessible_label: String,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize, accessible_label: impl Into<String>) -> Self {
        Self {
            canvas,
            accessible_label: accessible_label.into(),
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push(rect);
        self
    }

    #[must_use]
    pub fn with_triangle(mut self, triangle: TrianglePrimitive) -> Self {
        self.push(triangle);
        self
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn triangles(&self) -> impl Iterator<Item = &TrianglePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Triangle(triangle) => Some(triangle),
            _ => None,
        })
    }

    pub fn validate(&self) -> SparkChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(SparkChartError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.accessible_label.is_empty() {
            return Err(SparkChartError::InvalidData(
                "accessible label must not be empty".to_owned(),
            ));
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Serializes the frame to pretty JSON for fixtures and debugging.
    pub fn to_json_pretty(&self) -> SparkChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SparkChartError::InvalidData(format!("failed to serialize frame: {e}")))
    }
}
