use sparkchart::core::{DiagnosticCategory, Diagnostics, MeanIndicator};

fn parse(segment: &str) -> (Option<MeanIndicator>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mean = MeanIndicator::parse(Some(segment), &mut diagnostics);
    (mean, diagnostics)
}

#[test]
fn single_value_uses_the_percentage_range() {
    let (mean, diagnostics) = parse("50");
    let mean = mean.expect("implicit mean");
    assert_eq!(mean.range_min(), 0.0);
    assert_eq!(mean.range_max(), 100.0);
    assert_eq!(mean.value(), 50.0);
    assert!((mean.fraction() - 0.5).abs() <= 1e-12);
    assert!(diagnostics.is_empty());
}

#[test]
fn three_values_set_an_explicit_range() {
    let (mean, diagnostics) = parse(" 0 , 20 , 15 ");
    let mean = mean.expect("explicit mean");
    assert!((mean.fraction() - 0.75).abs() <= 1e-12);
    assert!(diagnostics.is_empty());
}

#[test]
fn absent_segment_means_no_indicator() {
    let mut diagnostics = Diagnostics::new();
    assert!(MeanIndicator::parse(None, &mut diagnostics).is_none());
    assert!(diagnostics.is_empty());
}

#[test]
fn two_values_are_rejected_for_arity() {
    let (mean, diagnostics) = parse("1,2");
    assert!(mean.is_none());
    let diagnostic = diagnostics.find(DiagnosticCategory::MeanArity).expect("arity warning");
    assert!(diagnostic.message.contains("Expected 1 value (implicit: mean) or 3 values"));

    let (mean, diagnostics) = parse("1,2,3,4");
    assert!(mean.is_none());
    assert!(diagnostics.contains(DiagnosticCategory::MeanArity));
}

#[test]
fn inverted_or_degenerate_range_is_rejected() {
    for segment in ["20,0,5", "5,5,5"] {
        let (mean, diagnostics) = parse(segment);
        assert!(mean.is_none(), "{segment}");
        assert!(diagnostics.contains(DiagnosticCategory::MeanRangeInverted), "{segment}");
    }
    let (_, diagnostics) = parse("20,0,5");
    assert_eq!(diagnostics.as_slice()[0].message, "Mean min (20) >= max (0). Ignoring.");
}

#[test]
fn negative_means_are_rejected() {
    for segment in ["-1", "0,10,-1"] {
        let (mean, diagnostics) = parse(segment);
        assert!(mean.is_none(), "{segment}");
        assert!(diagnostics.contains(DiagnosticCategory::NegativeMean), "{segment}");
    }
}

#[test]
fn non_numeric_mean_is_rejected() {
    let (mean, diagnostics) = parse("avg");
    assert!(mean.is_none());
    assert_eq!(
        diagnostics.find(DiagnosticCategory::InvalidMean).expect("warning").message,
        "Invalid mean value \"avg\". Ignoring."
    );

    let (mean, diagnostics) = parse("0,x,5");
    assert!(mean.is_none());
    assert!(diagnostics.contains(DiagnosticCategory::InvalidMean));
}

#[test]
fn out_of_range_mean_is_kept_uncorrected() {
    let (mean, diagnostics) = parse("0,10,15");
    let mean = mean.expect("mean kept");
    assert!(diagnostics.contains(DiagnosticCategory::MeanOutOfRange));
    assert_eq!(
        diagnostics.as_slice()[0].message,
        "Mean (15) outside specified range [0, 10]."
    );
    assert!(!mean.is_within_range());
    assert!((mean.fraction() - 1.5).abs() <= 1e-12);

    // The implicit form does not check its range.
    let (mean, diagnostics) = parse("150");
    assert!((mean.expect("mean kept").fraction() - 1.5).abs() <= 1e-12);
    assert!(diagnostics.is_empty());
}
