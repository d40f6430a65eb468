use proptest::prelude::*;
use sparkchart::api::{ChartRequest, ResolvedStyle, SparkChartConfig, SparkChartEngine};
use sparkchart::core::ChartMode;
use sparkchart::render::{NullRenderer, Paint};

fn engine() -> SparkChartEngine<NullRenderer> {
    SparkChartEngine::new(NullRenderer::default(), SparkChartConfig::default()).expect("engine")
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format!("{value}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn mode_strategy() -> impl Strategy<Value = ChartMode> {
    prop_oneof![Just(ChartMode::Bars), Just(ChartMode::Tone)]
}

proptest! {
    #[test]
    fn effective_max_never_below_data_max(
        points in prop::collection::vec(-500.0f64..500.0, 1..40),
        requested in prop::option::of(-100.0f64..1000.0),
    ) {
        let mut text = join(&points);
        if let Some(requested) = requested {
            text.push_str(&format!(";{requested}"));
        }
        let outcome = engine().build_chart(&ChartRequest::new(
            text,
            ChartMode::Bars,
            ResolvedStyle::new(16.0, Paint::CurrentColor),
        ));
        let chart = outcome.chart.expect("chart");
        prop_assert!(chart.scale.effective_max() >= chart.scale.data_max());
        prop_assert!(chart.scale.data_max() >= 0.0);
    }

    #[test]
    fn bar_heights_stay_between_floor_and_available_height(
        points in prop::collection::vec(-50.0f64..1000.0, 1..40),
        font_size in 4.0f64..48.0,
        mode in mode_strategy(),
    ) {
        let outcome = engine().build_chart(&ChartRequest::new(
            join(&points),
            mode,
            ResolvedStyle::new(font_size, Paint::CurrentColor),
        ));
        let chart = outcome.chart.expect("chart");
        let available = chart.layout.units.available_height();
        let effective_max = chart.scale.effective_max();

        prop_assert_eq!(chart.layout.bars.len(), points.len());
        for (bar, point) in chart.layout.bars.iter().zip(&points) {
            prop_assert!(bar.height >= 1.0);
            prop_assert!(bar.height <= available.max(1.0) + 1e-9);
            let proportional = if effective_max > 0.0 {
                point.max(0.0) / effective_max * available
            } else {
                0.0
            };
            if proportional < 1.0 {
                prop_assert_eq!(bar.height, 1.0);
            } else {
                prop_assert!((bar.height - proportional).abs() <= 1e-9);
            }
            prop_assert_eq!(bar.value, *point);
        }
    }

    #[test]
    fn canvas_width_follows_point_count(
        count in 1usize..60,
        font_size in 4.0f64..48.0,
    ) {
        let points = vec![1.0; count];
        let outcome = engine().build_chart(&ChartRequest::new(
            join(&points),
            ChartMode::Bars,
            ResolvedStyle::new(font_size, Paint::CurrentColor),
        ));
        let frame = outcome.frame().expect("frame");
        let n = count as f64;
        let expected = n * font_size + (n - 1.0) * 0.2 * font_size;
        prop_assert!((frame.canvas.width - expected).abs() <= 1e-6);
    }

    #[test]
    fn mean_marker_is_monotonic_and_within_bar_centers(
        count in 2usize..30,
        low in 0.0f64..100.0,
        high in 0.0f64..100.0,
        mode in mode_strategy(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let points = join(&vec![3.0; count]);
        let marker_x = |mean: f64| {
            let outcome = engine().build_chart(&ChartRequest::new(
                format!("{points};;0,100,{mean}"),
                mode,
                ResolvedStyle::new(16.0, Paint::CurrentColor),
            ));
            let chart = outcome.chart.expect("chart");
            let units = chart.layout.units;
            let marker = chart.layout.mean_marker.expect("marker");
            (marker.center_x, units.first_bar_center(), units.last_bar_center())
        };

        let (low_x, first, last) = marker_x(low);
        let (high_x, _, _) = marker_x(high);
        prop_assert!(low_x <= high_x + 1e-9);
        prop_assert!(low_x >= first - 1e-9 && high_x <= last + 1e-9);
    }

    #[test]
    fn identical_text_yields_identical_frames(
        text in "[0-9a-z,;. -]{0,40}",
        mode in mode_strategy(),
    ) {
        let request = ChartRequest::new(text, mode, ResolvedStyle::new(13.0, Paint::CurrentColor));
        let engine = engine();
        prop_assert_eq!(engine.build_chart(&request), engine.build_chart(&request));
    }
}
