use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::diagnostics::{
    Diagnostic, DiagnosticCategory, Diagnostics, format_value, join_values,
};
use crate::core::tokens::parse_number;
use crate::error::{SparkChartError, SparkChartResult};

/// Ordered, non-empty sequence of finite point values.
///
/// Values keep their original sign. Negative values are clamped to zero only
/// when bar heights are computed, so titles can still show the true value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PointSeries {
    values: Vec<f64>,
}

impl PointSeries {
    pub fn new(values: Vec<f64>) -> SparkChartResult<Self> {
        if values.is_empty() {
            return Err(SparkChartError::InvalidData(
                "point series must not be empty".to_owned(),
            ));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(SparkChartError::InvalidData(
                "point values must be finite".to_owned(),
            ));
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, floored at zero.
    #[must_use]
    pub fn data_max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0)
            .max(0.0)
    }

    #[must_use]
    pub fn negative_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .copied()
            .filter(|value| *value < 0.0)
            .collect()
    }
}

impl TryFrom<Vec<f64>> for PointSeries {
    type Error = SparkChartError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<PointSeries> for Vec<f64> {
    fn from(series: PointSeries) -> Self {
        series.values
    }
}

/// Classifies point tokens and builds the series.
///
/// Returns `None` when no token is numeric; the chart is then skipped
/// without any diagnostic. Otherwise non-numeric tokens and negative values
/// are each reported once, as aggregated lists.
pub fn validate_points(tokens: &[String], diagnostics: &mut Diagnostics) -> Option<PointSeries> {
    let mut values = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match parse_number(token) {
            Some(value) => values.push(value),
            None => invalid.push(token.as_str()),
        }
    }

    let series = PointSeries::new(values).ok()?;

    if !invalid.is_empty() {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::NonNumericPoints,
                format!(
                    "Found {} non-numeric value(s): [{}]. Non-numeric values will be ignored.",
                    invalid.len(),
                    invalid.join(", ")
                ),
            )
            .with_data(invalid.iter().copied()),
        );
    }

    let negatives = series.negative_values();
    if !negatives.is_empty() {
        let listed = join_values(&negatives);
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::NegativePoints,
                format!(
                    "Found {} negative value(s): [{listed}]. Negative values will be rendered as zero.",
                    negatives.len()
                ),
            )
            .with_data(negatives.iter().map(|value| format_value(*value))),
        );
    }

    Some(series)
}
