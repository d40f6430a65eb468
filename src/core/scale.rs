use serde::{Deserialize, Serialize};

use crate::core::diagnostics::{Diagnostic, DiagnosticCategory, Diagnostics, format_value};
use crate::core::series::PointSeries;
use crate::core::tokens::parse_number;

/// Normalization reference for bar heights.
///
/// Invariant: `effective_max >= data_max`. Override requests that would break
/// it are corrected to `data_max`, never honored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleContext {
    data_max: f64,
    effective_max: f64,
}

impl ScaleContext {
    /// Auto-scaled context: `effective_max == data_max`.
    #[must_use]
    pub fn auto(series: &PointSeries) -> Self {
        let data_max = series.data_max();
        Self {
            data_max,
            effective_max: data_max,
        }
    }

    /// Resolves the effective max from an optional override segment.
    pub fn resolve(
        series: &PointSeries,
        override_text: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let auto = Self::auto(series);
        let Some(text) = override_text else {
            return auto;
        };
        let data_max = auto.data_max;

        match parse_number(text) {
            Some(requested) if requested >= 0.0 => {
                if requested < data_max {
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCategory::MaxBelowData,
                            format!(
                                "Max value ({}) < data max ({}). Using {}.",
                                format_value(requested),
                                format_value(data_max),
                                format_value(data_max)
                            ),
                        )
                        .with_data([format_value(requested), format_value(data_max)]),
                    );
                    auto
                } else {
                    Self {
                        data_max,
                        effective_max: requested,
                    }
                }
            }
            _ => {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCategory::InvalidMax,
                        format!(
                            "Invalid max value \"{text}\". Using auto-scale ({}).",
                            format_value(data_max)
                        ),
                    )
                    .with_data([text]),
                );
                auto
            }
        }
    }

    #[must_use]
    pub fn data_max(self) -> f64 {
        self.data_max
    }

    #[must_use]
    pub fn effective_max(self) -> f64 {
        self.effective_max
    }

    /// Maps a raw value to `[0, 1]`, clamping negatives to zero.
    ///
    /// Returns `0` when the effective max is zero.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.effective_max > 0.0 {
            value.max(0.0) / self.effective_max
        } else {
            0.0
        }
    }
}
