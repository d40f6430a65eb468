use sparkchart::core::{
    ChartSpec, DiagnosticCategory, Diagnostics, MeanIndicator, PointSeries, ScaleContext, split_list,
    validate_points,
};

fn series_of(text: &str) -> (Option<PointSeries>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let series = validate_points(&split_list(text), &mut diagnostics);
    (series, diagnostics)
}

#[test]
fn chart_text_splits_into_segments() {
    let spec = ChartSpec::parse("1, 2, 3;10;0,20,15");
    assert_eq!(spec.points_text, "1, 2, 3");
    assert_eq!(spec.max_override_text, Some("10"));
    assert_eq!(spec.mean_spec_text, Some("0,20,15"));
    assert_eq!(spec.point_tokens(), vec!["1", "2", "3"]);

    let bare = ChartSpec::parse("7");
    assert_eq!(bare.max_override_text, None);
    assert_eq!(bare.mean_spec_text, None);
}

#[test]
fn two_item_list_in_max_slot_is_treated_as_a_mean_spec() {
    let spec = ChartSpec::parse("1,2;5,6");
    assert_eq!(spec.max_override_text, None);
    assert_eq!(spec.mean_spec_text, Some("5,6"));

    let mut diagnostics = Diagnostics::new();
    assert!(MeanIndicator::parse(spec.mean_spec_text, &mut diagnostics).is_none());
    assert!(diagnostics.contains(DiagnosticCategory::MeanArity));
    assert!(!diagnostics.contains(DiagnosticCategory::InvalidMax));
}

#[test]
fn empty_tokens_count_as_non_numeric() {
    let (series, diagnostics) = series_of("1,,2");
    assert_eq!(series.expect("series").values(), &[1.0, 2.0]);
    let diagnostic = diagnostics
        .find(DiagnosticCategory::NonNumericPoints)
        .expect("warning");
    assert_eq!(diagnostic.data, vec![String::new()]);
}

#[test]
fn negative_values_are_reported_once() {
    let (series, diagnostics) = series_of("-1,4,-2.5");
    let series = series.expect("series");
    assert_eq!(series.negative_values(), vec![-1.0, -2.5]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.as_slice()[0].message,
        "Found 2 negative value(s): [-1, -2.5]. Negative values will be rendered as zero."
    );
}

#[test]
fn series_serializes_as_a_plain_list() {
    let series = PointSeries::new(vec![1.5, -2.0]).expect("series");
    let json = serde_json::to_string(&series).expect("json");
    assert_eq!(json, "[1.5,-2.0]");
    let back: PointSeries = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, series);
    assert!(serde_json::from_str::<PointSeries>("[]").is_err());
}

#[test]
fn scale_normalizes_against_effective_max() {
    let series = PointSeries::new(vec![2.0, 4.0]).expect("series");
    let mut diagnostics = Diagnostics::new();
    let scale = ScaleContext::resolve(&series, Some("8"), &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(scale.data_max(), 4.0);
    assert_eq!(scale.effective_max(), 8.0);
    assert_eq!(scale.normalize(4.0), 0.5);
    assert_eq!(scale.normalize(-3.0), 0.0);
}

#[test]
fn invalid_override_warning_names_the_text_and_fallback() {
    let series = PointSeries::new(vec![1.0, 3.0]).expect("series");
    let mut diagnostics = Diagnostics::new();
    let scale = ScaleContext::resolve(&series, Some("lots"), &mut diagnostics);

    assert_eq!(scale, ScaleContext::auto(&series));
    assert_eq!(
        diagnostics.as_slice()[0].to_string(),
        "SparkCharts: Invalid max value \"lots\". Using auto-scale (3)."
    );
}

#[test]
fn zero_effective_max_normalizes_to_zero() {
    let series = PointSeries::new(vec![0.0, -1.0]).expect("series");
    let scale = ScaleContext::auto(&series);
    assert_eq!(scale.effective_max(), 0.0);
    assert_eq!(scale.normalize(5.0), 0.0);
}
