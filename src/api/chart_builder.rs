use serde::Serialize;
use tracing::{trace, warn};

use crate::core::diagnostics::format_value;
use crate::core::{
    ChartLayout, ChartMode, ChartSpec, Diagnostics, MeanIndicator, PointSeries, ScaleContext,
    validate_points,
};
use crate::error::SparkChartResult;
use crate::render::{RenderFrame, Renderer};

use super::bar_render_frame_builder::build_bar_frame;
use super::tone_render_frame_builder::build_tone_frame;
use super::{ChartElement, RenderSurface, ResolvedStyle, SparkChartConfig, SparkChartEngine};

/// Input for one chart computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub text: String,
    pub mode: ChartMode,
    pub style: ResolvedStyle,
}

impl ChartRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, mode: ChartMode, style: ResolvedStyle) -> Self {
        Self {
            text: text.into(),
            mode,
            style,
        }
    }

    #[must_use]
    pub fn from_element(element: &ChartElement, style: ResolvedStyle) -> Self {
        Self::new(element.text.clone(), element.chart_mode(), style)
    }
}

/// Everything computed for a chart that was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkChart {
    pub mode: ChartMode,
    pub series: PointSeries,
    pub scale: ScaleContext,
    pub mean: Option<MeanIndicator>,
    pub layout: ChartLayout,
    pub frame: RenderFrame,
}

/// Result of one chart computation.
///
/// `chart` is `None` when the text held no numeric point; that case carries
/// no diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOutcome {
    pub chart: Option<SparkChart>,
    pub diagnostics: Diagnostics,
}

impl ChartOutcome {
    fn skipped(diagnostics: Diagnostics) -> Self {
        Self {
            chart: None,
            diagnostics,
        }
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.chart.is_some()
    }

    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.chart.as_ref().map(|chart| &chart.frame)
    }
}

/// Accessibility label shared by both modes.
#[must_use]
pub fn accessible_label(point_count: usize, mean: Option<MeanIndicator>) -> String {
    let mut label = format!("Bar chart with {point_count} data points");
    if let Some(mean) = mean {
        label.push_str(&format!(", mean at {}", format_value(mean.value())));
    }
    label
}

impl<S: RenderSurface> SparkChartEngine<S> {
    /// Runs the pipeline without publishing diagnostics or touching the surface.
    ///
    /// The result depends only on the request and the engine config.
    #[must_use]
    pub fn build_chart(&self, request: &ChartRequest) -> ChartOutcome {
        compute_chart(&self.config, request)
    }
}

pub(super) fn compute_chart(config: &SparkChartConfig, request: &ChartRequest) -> ChartOutcome {
    let mut diagnostics = Diagnostics::new();
    let spec = ChartSpec::parse(&request.text);

    let Some(series) = validate_points(&spec.point_tokens(), &mut diagnostics) else {
        trace!(text = request.text.as_str(), "no numeric points");
        return ChartOutcome::skipped(diagnostics);
    };
    let scale = ScaleContext::resolve(&series, spec.max_override_text, &mut diagnostics);
    let mean = MeanIndicator::parse(spec.mean_spec_text, &mut diagnostics);

    let requested_size = request.style.font_size_px;
    let font_size_px = if requested_size.is_finite() && requested_size > 0.0 {
        requested_size
    } else {
        config.fallback_font_size_px
    };
    let layout = match ChartLayout::compute(
        request.mode,
        &series,
        scale,
        mean,
        font_size_px,
        config.em_scale(),
        config.min_bar_height_px,
    ) {
        Ok(layout) => layout,
        Err(err) => {
            warn!(error = %err, "skipping chart with unusable layout");
            return ChartOutcome::skipped(diagnostics);
        }
    };

    let label = accessible_label(series.len(), mean);
    let frame = match request.mode {
        ChartMode::Bars => build_bar_frame(&layout, request.style.paint, config, label),
        ChartMode::Tone => build_tone_frame(&layout, request.style.paint, config, label),
    };
    trace!(
        mode = request.mode.as_str(),
        points = series.len(),
        effective_max = scale.effective_max(),
        "built sparkchart"
    );

    ChartOutcome {
        chart: Some(SparkChart {
            mode: request.mode,
            series,
            scale,
            mean,
            layout,
            frame,
        }),
        diagnostics,
    }
}

impl<R: Renderer> SparkChartEngine<R> {
    /// Builds a chart and draws it directly on the engine's renderer.
    pub fn render_text(
        &mut self,
        text: &str,
        mode: ChartMode,
        style: ResolvedStyle,
    ) -> SparkChartResult<ChartOutcome> {
        let outcome = self.build_chart(&ChartRequest::new(text, mode, style));
        self.publish(None, &outcome.diagnostics);
        if let Some(frame) = outcome.frame() {
            self.surface.render(frame)?;
        }
        Ok(outcome)
    }
}
