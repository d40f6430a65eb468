use sparkchart::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn default_filter_shows_diagnostics_only() {
    assert_eq!(DEFAULT_FILTER, "warn");
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn setup_is_a_no_op_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("sparkchart=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn only_the_first_subscriber_is_installed() {
    let _ = init_tracing_with_filter("sparkchart=debug");
    assert!(!init_default_tracing());
}
