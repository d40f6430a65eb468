use crate::core::ChartLayout;
use crate::core::diagnostics::format_value;
use crate::render::{LinePrimitive, Paint, RectPrimitive, RenderFrame};

use super::SparkChartConfig;
use super::mean_indicator_primitives_builder::mean_indicator_primitives;

/// Tone mode: a centered baseline with each bar mirrored above and below it.
///
/// Only the upper half of each pair carries the value title.
pub(super) fn build_tone_frame(
    layout: &ChartLayout,
    paint: Paint,
    config: &SparkChartConfig,
    label: String,
) -> RenderFrame {
    let units = layout.units;
    let center_y = units.baseline_y();
    let mut frame = RenderFrame::new(layout.canvas(), label).with_line(LinePrimitive::new(
        0.0,
        center_y,
        units.canvas_width,
        center_y,
        config.line_width_px,
        paint,
    ));

    for bar in &layout.bars {
        frame.push(
            RectPrimitive::new(bar.x, center_y - bar.height, bar.width, bar.height, paint)
                .with_title(format_value(bar.value)),
        );
        frame.push(RectPrimitive::new(
            bar.x, center_y, bar.width, bar.height, paint,
        ));
    }

    if let Some(marker) = layout.mean_marker {
        frame
            .primitives
            .extend(mean_indicator_primitives(marker, paint, config));
    }

    frame
}
