use smallvec::SmallVec;

use crate::core::MeanMarkerLayout;
use crate::core::diagnostics::format_value;
use crate::render::{
    LinePrimitive, LineStrokeStyle, Paint, Primitive, TriangleApex, TrianglePrimitive,
};

use super::SparkChartConfig;

/// Mean marker primitives: top triangle, optional bottom triangle, dashed line.
///
/// Emitted after the bars so the indicator layers on top.
pub(super) fn mean_indicator_primitives(
    marker: MeanMarkerLayout,
    paint: Paint,
    config: &SparkChartConfig,
) -> SmallVec<[Primitive; 3]> {
    let mut primitives: SmallVec<[Primitive; 3]> = SmallVec::new();
    let left = marker.triangle_left();

    primitives.push(
        TrianglePrimitive::new(
            TriangleApex::Down,
            left,
            0.0,
            marker.triangle_width,
            marker.triangle_height,
            paint,
        )
        .with_title(format!("Mean: {}", format_value(marker.value)))
        .into(),
    );

    if let Some(bottom_y) = marker.bottom_marker_y {
        primitives.push(
            TrianglePrimitive::new(
                TriangleApex::Up,
                left,
                bottom_y,
                marker.triangle_width,
                marker.triangle_height,
                paint,
            )
            .into(),
        );
    }

    let [dash_px, gap_px] = config.mean_line_dash;
    primitives.push(
        LinePrimitive::new(
            marker.center_x,
            marker.line_top,
            marker.center_x,
            marker.line_bottom,
            config.line_width_px,
            paint,
        )
        .with_stroke_style(LineStrokeStyle::Dashed { dash_px, gap_px })
        .into(),
    );

    primitives
}
