use std::sync::Arc;

use sparkchart::api::{ChartRequest, CollectingSink, ResolvedStyle, SparkChartConfig, SparkChartEngine};
use sparkchart::core::{ChartMode, DiagnosticCategory};
use sparkchart::render::{NullRenderer, Paint};

fn requests() -> Vec<ChartRequest> {
    (0..64)
        .map(|i| {
            let mode = if i % 2 == 0 { ChartMode::Bars } else { ChartMode::Tone };
            let text = match i % 4 {
                0 => format!("{i},{},{}", i + 1, i * 2),
                1 => format!("x,{i};1;50"),
                2 => "nothing".to_owned(),
                _ => format!("{i},-{i};;0,{},{}", i + 10, i),
            };
            ChartRequest::new(text, mode, ResolvedStyle::new(12.0, Paint::CurrentColor))
        })
        .collect()
}

#[test]
fn batch_matches_one_by_one_builds_in_order() {
    let engine =
        SparkChartEngine::new(NullRenderer::default(), SparkChartConfig::default()).expect("engine");
    let requests = requests();

    let batch = engine.build_charts(&requests);
    let sequential: Vec<_> = requests.iter().map(|request| engine.build_chart(request)).collect();

    assert_eq!(batch.len(), requests.len());
    assert_eq!(batch, sequential);
    assert_eq!(batch.iter().filter(|outcome| outcome.is_rendered()).count(), 48);
}

#[test]
fn batch_publishes_every_diagnostic_and_attaches_nothing() {
    let sink = Arc::new(CollectingSink::new());
    let engine = SparkChartEngine::new(NullRenderer::default(), SparkChartConfig::default())
        .expect("engine")
        .with_sink(sink.clone());

    let outcomes = engine.build_charts(&requests());
    let expected: usize = outcomes.iter().map(|outcome| outcome.diagnostics.len()).sum();

    assert_eq!(sink.snapshot().len(), expected);
    assert_eq!(sink.count(DiagnosticCategory::NonNumericPoints), 16);
    assert_eq!(engine.surface().frames_rendered, 0);
}
