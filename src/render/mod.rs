mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, Paint, Primitive, RectPrimitive, TriangleApex,
    TrianglePrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer, frame_to_svg};

use crate::error::SparkChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from parsing and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SparkChartResult<()>;
}
