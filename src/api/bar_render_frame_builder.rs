use crate::core::ChartLayout;
use crate::core::diagnostics::format_value;
use crate::render::{Paint, RectPrimitive, RenderFrame};

use super::SparkChartConfig;
use super::mean_indicator_primitives_builder::mean_indicator_primitives;

/// Bars grow upward from the canvas bottom; marker space stays above them.
pub(super) fn build_bar_frame(
    layout: &ChartLayout,
    paint: Paint,
    config: &SparkChartConfig,
    label: String,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.canvas(), label);
    let bottom = layout.units.canvas_height;

    for bar in &layout.bars {
        frame.push(
            RectPrimitive::new(bar.x, bottom - bar.height, bar.width, bar.height, paint)
                .with_title(format_value(bar.value)),
        );
    }

    if let Some(marker) = layout.mean_marker {
        frame
            .primitives
            .extend(mean_indicator_primitives(marker, paint, config));
    }

    frame
}
