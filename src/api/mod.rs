mod bar_render_frame_builder;
mod batch;
mod chart_builder;
mod diagnostics_sink;
mod document_runner;
mod engine;
mod engine_config;
mod host;
mod mean_indicator_primitives_builder;
mod tone_render_frame_builder;

pub use chart_builder::{ChartOutcome, ChartRequest, SparkChart, accessible_label};
pub use diagnostics_sink::{CollectedDiagnostic, CollectingSink, DiagnosticsSink, TracingSink};
pub use document_runner::{DocumentReport, ElementReport, ElementStatus};
pub use engine::SparkChartEngine;
pub use engine_config::SparkChartConfig;
pub use host::{
    ChartElement, ElementLocator, FixedStyleReader, RenderSurface, ResolvedStyle, StyleReader,
    SvgDocumentSurface,
};
