use std::sync::Arc;

use tracing::debug;

use crate::core::Diagnostics;
use crate::error::SparkChartResult;

use super::{
    ChartElement, ChartOutcome, ChartRequest, DiagnosticsSink, RenderSurface, ResolvedStyle,
    SparkChartConfig, TracingSink,
};

/// Main orchestration facade consumed by host applications.
///
/// `SparkChartEngine` runs the parse, validate, scale, layout and draw
/// pipeline for each chart, publishes diagnostics to its sink, and hands
/// finished frames to the render surface.
pub struct SparkChartEngine<S: RenderSurface> {
    pub(super) surface: S,
    pub(super) config: SparkChartConfig,
    pub(super) sink: Arc<dyn DiagnosticsSink>,
}

impl<S: RenderSurface> SparkChartEngine<S> {
    /// Creates an engine after validating `config`.
    pub fn new(surface: S, config: SparkChartConfig) -> SparkChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            surface,
            config,
            sink: Arc::new(TracingSink),
        })
    }

    /// Replaces the diagnostics sink (tracing by default).
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn config(&self) -> SparkChartConfig {
        self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Builds one chart and attaches it to the surface under `element.id`.
    ///
    /// Input problems never fail this call; they are published and returned
    /// with the outcome. Only surface failures surface as errors.
    pub fn render_element(
        &mut self,
        element: &ChartElement,
        style: ResolvedStyle,
    ) -> SparkChartResult<ChartOutcome> {
        let outcome = self.build_and_publish(element, style);
        self.attach_outcome(element, &outcome)?;
        Ok(outcome)
    }

    pub(super) fn build_and_publish(
        &self,
        element: &ChartElement,
        style: ResolvedStyle,
    ) -> ChartOutcome {
        let outcome = self.build_chart(&ChartRequest::from_element(element, style));
        self.publish(Some(&element.id), &outcome.diagnostics);
        outcome
    }

    /// Hands a built chart to the surface. Skipped outcomes attach nothing.
    pub(super) fn attach_outcome(
        &mut self,
        element: &ChartElement,
        outcome: &ChartOutcome,
    ) -> SparkChartResult<()> {
        match &outcome.chart {
            Some(chart) => {
                debug!(
                    element = element.id.as_str(),
                    points = chart.series.len(),
                    primitives = chart.frame.primitives.len(),
                    "attach sparkchart"
                );
                self.surface.attach(&element.id, &chart.frame)
            }
            None => {
                debug!(element = element.id.as_str(), "no valid points, chart skipped");
                Ok(())
            }
        }
    }

    pub(super) fn publish(&self, element_id: Option<&str>, diagnostics: &Diagnostics) {
        if self.config.quiet {
            return;
        }
        for diagnostic in diagnostics {
            self.sink.publish(element_id, diagnostic);
        }
    }
}
