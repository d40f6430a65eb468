use serde::{Deserialize, Serialize};

use crate::core::mean::MeanIndicator;
use crate::core::scale::ScaleContext;
use crate::core::series::PointSeries;
use crate::core::types::{CanvasSize, ChartMode};
use crate::error::{SparkChartError, SparkChartResult};

/// Em multipliers applied to the resolved font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmScale {
    pub bar_width_em: f64,
    pub gap_em: f64,
    pub height_em: f64,
    pub mean_marker_height_em: f64,
}

impl Default for EmScale {
    fn default() -> Self {
        Self {
            bar_width_em: 1.0,
            gap_em: 0.2,
            height_em: 2.0,
            mean_marker_height_em: 0.6,
        }
    }
}

impl EmScale {
    pub fn validate(self) -> SparkChartResult<Self> {
        for (name, value) in [
            ("bar_width_em", self.bar_width_em),
            ("gap_em", self.gap_em),
            ("height_em", self.height_em),
            ("mean_marker_height_em", self.mean_marker_height_em),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SparkChartError::InvalidConfig(format!(
                    "em scale `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Pixel measurements for one chart, all derived from `font_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutUnits {
    pub mode: ChartMode,
    pub point_count: usize,
    pub font_size: f64,
    pub bar_width: f64,
    pub gap: f64,
    /// Height budget of one bar area (above the baseline in tone mode).
    pub chart_height: f64,
    /// Zero when no mean indicator is drawn.
    pub marker_height: f64,
    /// Horizontal inset before the first bar; one gap in tone mode.
    pub padding: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl LayoutUnits {
    pub fn compute(
        mode: ChartMode,
        point_count: usize,
        font_size: f64,
        em: EmScale,
        has_mean: bool,
    ) -> SparkChartResult<Self> {
        if point_count == 0 {
            return Err(SparkChartError::InvalidData(
                "layout requires at least one point".to_owned(),
            ));
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(SparkChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        let em = em.validate()?;

        let bar_width = em.bar_width_em * font_size;
        let gap = em.gap_em * font_size;
        let chart_height = em.height_em * font_size;
        let marker_height = if has_mean {
            em.mean_marker_height_em * font_size
        } else {
            0.0
        };

        let count = point_count as f64;
        let content_width = count * bar_width + (count - 1.0) * gap;
        let (padding, canvas_height) = match mode {
            ChartMode::Bars => (0.0, chart_height + marker_height),
            ChartMode::Tone => (gap, 2.0 * chart_height + 2.0 * marker_height),
        };

        Ok(Self {
            mode,
            point_count,
            font_size,
            bar_width,
            gap,
            chart_height,
            marker_height,
            padding,
            canvas_width: content_width + 2.0 * padding,
            canvas_height,
        })
    }

    #[must_use]
    pub fn canvas(self) -> CanvasSize {
        CanvasSize::new(self.canvas_width, self.canvas_height)
    }

    /// Height mapped to a normalized value of `1`.
    #[must_use]
    pub fn available_height(self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn bar_x(self, index: usize) -> f64 {
        self.padding + index as f64 * (self.bar_width + self.gap)
    }

    #[must_use]
    pub fn bar_center_x(self, index: usize) -> f64 {
        self.bar_x(index) + self.bar_width * 0.5
    }

    #[must_use]
    pub fn first_bar_center(self) -> f64 {
        self.bar_center_x(0)
    }

    #[must_use]
    pub fn last_bar_center(self) -> f64 {
        self.bar_center_x(self.point_count - 1)
    }

    /// Vertical center; only meaningful as a baseline in tone mode.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.canvas_height * 0.5
    }

    /// Proportional bar height with a legibility floor.
    #[must_use]
    pub fn bar_height(self, normalized: f64, min_height: f64) -> f64 {
        (normalized * self.available_height()).max(min_height)
    }

    /// Interpolates the mean between the first and last bar centers.
    ///
    /// Out-of-range means land outside that span. A position too far out to
    /// represent is pinned to the bar center on the side it overflowed.
    #[must_use]
    pub fn mean_x(self, mean: MeanIndicator) -> f64 {
        let first = self.first_bar_center();
        let last = self.last_bar_center();
        let x = first + mean.fraction() * (last - first);
        if x.is_finite() {
            x
        } else if x == f64::INFINITY {
            last
        } else {
            first
        }
    }
}

/// One bar slot. `value` is the unclamped source value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Mean marker placement. Triangles are equilateral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanMarkerLayout {
    pub value: f64,
    pub center_x: f64,
    pub triangle_width: f64,
    pub triangle_height: f64,
    /// Top edge of the upward marker; tone mode only.
    pub bottom_marker_y: Option<f64>,
    pub line_top: f64,
    pub line_bottom: f64,
}

impl MeanMarkerLayout {
    #[must_use]
    pub fn triangle_left(self) -> f64 {
        self.center_x - self.triangle_width * 0.5
    }
}

/// Width of an equilateral triangle of the given height.
#[must_use]
pub fn equilateral_width(height: f64) -> f64 {
    2.0 * height / 3.0_f64.sqrt()
}

/// Complete geometry for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub units: LayoutUnits,
    pub bars: Vec<BarSlot>,
    pub mean_marker: Option<MeanMarkerLayout>,
}

impl ChartLayout {
    pub fn compute(
        mode: ChartMode,
        series: &PointSeries,
        scale: ScaleContext,
        mean: Option<MeanIndicator>,
        font_size: f64,
        em: EmScale,
        min_bar_height: f64,
    ) -> SparkChartResult<Self> {
        let units = LayoutUnits::compute(mode, series.len(), font_size, em, mean.is_some())?;

        let bars = series
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| BarSlot {
                index,
                value: *value,
                x: units.bar_x(index),
                width: units.bar_width,
                height: units.bar_height(scale.normalize(*value), min_bar_height),
            })
            .collect();

        let mean_marker = mean.map(|mean| {
            let height = units.marker_height;
            let (bottom_marker_y, line_bottom) = match mode {
                ChartMode::Bars => (None, units.canvas_height),
                ChartMode::Tone => (
                    Some(units.canvas_height - height),
                    units.canvas_height - height,
                ),
            };
            MeanMarkerLayout {
                value: mean.value(),
                center_x: units.mean_x(mean),
                triangle_width: equilateral_width(height),
                triangle_height: height,
                bottom_marker_y,
                line_top: height,
                line_bottom,
            }
        });

        Ok(Self {
            units,
            bars,
            mean_marker,
        })
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.units.mode
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.units.canvas()
    }
}

#[cfg(test)]
mod tests {
    use super::{EmScale, LayoutUnits, equilateral_width};
    use crate::core::mean::MeanIndicator;
    use crate::core::types::ChartMode;

    #[test]
    fn bar_units_follow_em_multipliers() {
        let units =
            LayoutUnits::compute(ChartMode::Bars, 3, 10.0, EmScale::default(), false).expect("units");
        assert!((units.bar_width - 10.0).abs() <= 1e-9);
        assert!((units.gap - 2.0).abs() <= 1e-9);
        assert!((units.canvas_width - 34.0).abs() <= 1e-9);
        assert!((units.canvas_height - 20.0).abs() <= 1e-9);
        assert_eq!(units.marker_height, 0.0);
    }

    #[test]
    fn tone_units_pad_and_mirror() {
        let units =
            LayoutUnits::compute(ChartMode::Tone, 2, 10.0, EmScale::default(), true).expect("units");
        assert!((units.canvas_width - (22.0 + 4.0)).abs() <= 1e-9);
        assert!((units.canvas_height - (40.0 + 12.0)).abs() <= 1e-9);
        assert!((units.first_bar_center() - 7.0).abs() <= 1e-9);
        assert!((units.last_bar_center() - 19.0).abs() <= 1e-9);
    }

    #[test]
    fn unrepresentable_mean_x_is_pinned_to_a_bar_center() {
        let units =
            LayoutUnits::compute(ChartMode::Bars, 3, 10.0, EmScale::default(), true).expect("units");
        let far_right = MeanIndicator::new(1e10, 0.0, 1e-300).expect("mean");
        assert_eq!(units.mean_x(far_right), units.last_bar_center());


        let single =
            LayoutUnits::compute(ChartMode::Tone, 1, 10.0, EmScale::default(), true).expect("units");
        assert_eq!(single.mean_x(far_right), single.first_bar_center());
    }

    #[test]
    fn equilateral_width_matches_height() {
        let width = equilateral_width(3.0_f64.sqrt());
        assert!((width - 2.0).abs() <= 1e-12);
    }

    #[test]
    fn layout_rejects_bad_font_size() {
        assert!(LayoutUnits::compute(ChartMode::Bars, 1, 0.0, EmScale::default(), false).is_err());
        assert!(LayoutUnits::compute(ChartMode::Bars, 0, 12.0, EmScale::default(), false).is_err());
    }
}
