use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix carried by every human-readable diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "SparkCharts";

/// Recoverable input problems. None of them aborts a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    NonNumericPoints,
    NegativePoints,
    InvalidMax,
    MaxBelowData,
    InvalidMean,
    NegativeMean,
    MeanRangeInverted,
    MeanOutOfRange,
    MeanArity,
}

impl DiagnosticCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonNumericPoints => "non_numeric_points",
            Self::NegativePoints => "negative_points",
            Self::InvalidMax => "invalid_max",
            Self::MaxBelowData => "max_below_data",
            Self::InvalidMean => "invalid_mean",
            Self::NegativeMean => "negative_mean",
            Self::MeanRangeInverted => "mean_range_inverted",
            Self::MeanOutOfRange => "mean_out_of_range",
            Self::MeanArity => "mean_arity",
        }
    }
}

/// One advisory message, with the offending literals attached as `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
    #[serde(default)]
    pub data: Vec<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_data<I, T>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIAGNOSTIC_PREFIX}: {}", self.message)
    }
}

/// Ordered diagnostics raised while building a single chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, category: DiagnosticCategory) -> bool {
        self.entries.iter().any(|entry| entry.category == category)
    }

    /// Returns the first diagnostic of `category`, if any.
    #[must_use]
    pub fn find(&self, category: DiagnosticCategory) -> Option<&Diagnostic> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Formats a number the way it appears in diagnostics and titles.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing `-0`.
        return "0".to_owned();
    }
    format!("{value}")
}

/// Joins values as `a, b, c` for diagnostic lists.
#[must_use]
pub fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format_value(*value))
        .collect::<Vec<_>>()
        .join(", ")
}
