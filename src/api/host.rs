//! Seams between the pure chart pipeline and the host document.
//!
//! The engine never queries a document directly. Hosts provide the eligible
//! elements, their computed style, and a surface that attaches finished
//! frames back to each element.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartMode;
use crate::error::SparkChartResult;
use crate::render::{Paint, RenderFrame, Renderer, frame_to_svg};

use super::SparkChartConfig;

/// One host element carrying a chart specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartElement {
    pub id: String,
    /// Text content, `points[;max][;mean]`.
    pub text: String,
    /// Raw mode attribute, `"bars"` or `"tone"`.
    #[serde(default)]
    pub mode: Option<String>,
}

impl ChartElement {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            mode: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn chart_mode(&self) -> ChartMode {
        ChartMode::from_attribute(self.mode.as_deref())
    }
}

/// Supplies the elements eligible for chart rendering, in document order.
pub trait ElementLocator {
    fn locate(&self) -> Vec<ChartElement>;
}

impl ElementLocator for [ChartElement] {
    fn locate(&self) -> Vec<ChartElement> {
        self.to_vec()
    }
}

impl ElementLocator for Vec<ChartElement> {
    fn locate(&self) -> Vec<ChartElement> {
        self.clone()
    }
}

/// Reads computed style for an element. `None` means "not available".
pub trait StyleReader {
    fn font_size_px(&self, element: &ChartElement) -> Option<f64>;
    fn paint(&self, element: &ChartElement) -> Option<Paint>;
}

/// Style reader returning the same values for every element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedStyleReader {
    pub font_size_px: Option<f64>,
    pub paint: Option<Paint>,
}

impl FixedStyleReader {
    #[must_use]
    pub fn new(font_size_px: f64, paint: Paint) -> Self {
        Self {
            font_size_px: Some(font_size_px),
            paint: Some(paint),
        }
    }
}

impl StyleReader for FixedStyleReader {
    fn font_size_px(&self, _element: &ChartElement) -> Option<f64> {
        self.font_size_px
    }

    fn paint(&self, _element: &ChartElement) -> Option<Paint> {
        self.paint
    }
}

/// Font size and paint after falling back to configured defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub font_size_px: f64,
    pub paint: Paint,
}

impl ResolvedStyle {
    #[must_use]
    pub fn new(font_size_px: f64, paint: Paint) -> Self {
        Self {
            font_size_px,
            paint,
        }
    }

    /// Uses config fallbacks for missing, non-finite, or non-positive values.
    #[must_use]
    pub fn resolve<Y: StyleReader + ?Sized>(
        reader: &Y,
        element: &ChartElement,
        config: &SparkChartConfig,
    ) -> Self {
        let font_size_px = reader
            .font_size_px(element)
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(config.fallback_font_size_px);
        let paint = reader
            .paint(element)
            .filter(|paint| paint.validate().is_ok())
            .unwrap_or(config.fallback_paint);
        Self {
            font_size_px,
            paint,
        }
    }

    #[must_use]
    pub fn fallback(config: &SparkChartConfig) -> Self {
        Self::new(config.fallback_font_size_px, config.fallback_paint)
    }
}

/// Attaches finished frames to host elements.
pub trait RenderSurface {
    fn attach(&mut self, element_id: &str, frame: &RenderFrame) -> SparkChartResult<()>;
}

/// Any frame renderer can act as a surface that ignores element identity.
impl<R: Renderer> RenderSurface for R {
    fn attach(&mut self, _element_id: &str, frame: &RenderFrame) -> SparkChartResult<()> {
        self.render(frame)
    }
}

/// Surface that stores SVG markup per element id, in attachment order.
#[derive(Debug, Default)]
pub struct SvgDocumentSurface {
    documents: IndexMap<String, String>,
}

impl SvgDocumentSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn markup(&self, element_id: &str) -> Option<&str> {
        self.documents.get(element_id).map(String::as_str)
    }

    #[must_use]
    pub fn documents(&self) -> &IndexMap<String, String> {
        &self.documents
    }

    #[must_use]
    pub fn into_documents(self) -> IndexMap<String, String> {
        self.documents
    }
}

impl RenderSurface for SvgDocumentSurface {
    fn attach(&mut self, element_id: &str, frame: &RenderFrame) -> SparkChartResult<()> {
        let markup = frame_to_svg(frame)?;
        // Re-rendering an element replaces its previous chart.
        self.documents.insert(element_id.to_owned(), markup);
        Ok(())
    }
}
