#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::chart_builder::compute_chart;
use super::{ChartOutcome, ChartRequest, RenderSurface, SparkChartEngine};

impl<S: RenderSurface> SparkChartEngine<S> {
    /// Computes many independent charts and publishes their diagnostics.
    ///
    /// Outcomes keep the order of `requests`. Nothing is attached to the
    /// surface.
    pub fn build_charts(&self, requests: &[ChartRequest]) -> Vec<ChartOutcome> {
        let config = self.config;

        // Charts share no state, so the parallel path yields the same outcomes.
        #[cfg(feature = "parallel")]
        let outcomes: Vec<ChartOutcome> = requests
            .par_iter()
            .map(|request| compute_chart(&config, request))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<ChartOutcome> = requests
            .iter()
            .map(|request| compute_chart(&config, request))
            .collect();

        for outcome in &outcomes {
            self.publish(None, &outcome.diagnostics);
        }
        outcomes
    }
}
