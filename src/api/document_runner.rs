use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartMode, Diagnostics};
use crate::error::{SparkChartError, SparkChartResult};

use super::{ElementLocator, RenderSurface, ResolvedStyle, SparkChartEngine, StyleReader};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ElementStatus {
    Rendered,
    /// No numeric point; nothing was attached.
    Skipped,
    /// The surface rejected the frame.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementReport {
    #[serde(flatten)]
    pub status: ElementStatus,
    pub mode: ChartMode,
    pub diagnostics: Diagnostics,
}

/// Per-element results of one document pass, in document order.
///
/// Elements sharing an id collapse into the last report for that id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub elements: IndexMap<String, ElementReport>,
}

impl DocumentReport {
    #[must_use]
    pub fn get(&self, element_id: &str) -> Option<&ElementReport> {
        self.elements.get(element_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.count_where(|status| matches!(status, ElementStatus::Rendered))
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count_where(|status| matches!(status, ElementStatus::Skipped))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count_where(|status| matches!(status, ElementStatus::Failed { .. }))
    }

    fn count_where(&self, predicate: impl Fn(&ElementStatus) -> bool) -> usize {
        self.elements
            .values()
            .filter(|report| predicate(&report.status))
            .count()
    }

    pub fn to_json_pretty(&self) -> SparkChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SparkChartError::InvalidData(format!("failed to serialize report: {e}")))
    }
}

impl<S: RenderSurface> SparkChartEngine<S> {
    /// Renders every located element independently.
    ///
    /// A skipped chart or a surface failure on one element never stops the
    /// remaining elements.
    pub fn render_document<L, Y>(&mut self, locator: &L, styles: &Y) -> DocumentReport
    where
        L: ElementLocator + ?Sized,
        Y: StyleReader + ?Sized,
    {
        let elements = locator.locate();
        debug!(count = elements.len(), "render sparkchart document");

        let mut report = DocumentReport::default();
        for element in elements {
            let style = ResolvedStyle::resolve(styles, &element, &self.config);
            let mode = element.chart_mode();
            let outcome = self.build_and_publish(&element, style);
            let status = match self.attach_outcome(&element, &outcome) {
                Ok(()) if outcome.is_rendered() => ElementStatus::Rendered,
                Ok(()) => ElementStatus::Skipped,
                Err(err) => {
                    warn!(element = element.id.as_str(), error = %err, "surface rejected sparkchart");
                    ElementStatus::Failed {
                        error: err.to_string(),
                    }
                }
            };
            let entry = ElementReport {
                status,
                mode,
                diagnostics: outcome.diagnostics,
            };
            report.elements.insert(element.id, entry);
        }
        report
    }
}
