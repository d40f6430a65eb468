use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::diagnostics::{Diagnostic, DiagnosticCategory, Diagnostics, format_value};
use crate::core::tokens::{parse_number, split_list};
use crate::error::{SparkChartError, SparkChartResult};

/// Range used by the single-value mean form.
pub const IMPLICIT_MEAN_RANGE: (f64, f64) = (0.0, 100.0);

/// Reference value drawn as a marker along the chart's horizontal span.
///
/// Invariants: all fields finite, `range_min < range_max`, `value >= 0`.
/// `value` may lie outside the range; that is reported, not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanIndicator {
    value: f64,
    range_min: f64,
    range_max: f64,
}

impl MeanIndicator {
    pub fn new(value: f64, range_min: f64, range_max: f64) -> SparkChartResult<Self> {
        if !value.is_finite() || !range_min.is_finite() || !range_max.is_finite() {
            return Err(SparkChartError::InvalidData(
                "mean value and range must be finite".to_owned(),
            ));
        }
        if range_min >= range_max {
            return Err(SparkChartError::InvalidData(
                "mean range min must be < max".to_owned(),
            ));
        }
        if value < 0.0 {
            return Err(SparkChartError::InvalidData(
                "mean value must be >= 0".to_owned(),
            ));
        }
        Ok(Self {
            value,
            range_min,
            range_max,
        })
    }

    /// Single-value form with the fixed `[0, 100]` range.
    pub fn implicit(value: f64) -> SparkChartResult<Self> {
        Self::new(value, IMPLICIT_MEAN_RANGE.0, IMPLICIT_MEAN_RANGE.1)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn range_min(self) -> f64 {
        self.range_min
    }

    #[must_use]
    pub fn range_max(self) -> f64 {
        self.range_max
    }

    /// Position of `value` inside the range, `0` at min and `1` at max.
    ///
    /// Terms are halved so ranges spanning most of `f64` do not overflow.
    /// The result is infinite only when the true fraction exceeds `f64::MAX`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        let (value, min, max) = (self.value * 0.5, self.range_min * 0.5, self.range_max * 0.5);
        (value - min) / (max - min)
    }

    #[must_use]
    pub fn is_within_range(self) -> bool {
        (self.range_min..=self.range_max).contains(&self.value)
    }

    /// Parses the optional mean segment.
    ///
    /// Accepts `mean` (range `[0, 100]`) or `min, max, mean`. Every rejected
    /// form is reported and yields `None`.
    pub fn parse(segment: Option<&str>, diagnostics: &mut Diagnostics) -> Option<Self> {
        let segment = segment?;
        let tokens: SmallVec<[String; 3]> = split_list(segment)
            .into_iter()
            .filter(|token| !token.is_empty())
            .collect();

        match tokens.as_slice() {
            [mean] => parse_implicit(mean, diagnostics),
            [min, max, mean] => parse_explicit(segment, min, max, mean, diagnostics),
            _ => {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCategory::MeanArity,
                        format!(
                            "Invalid mean specification \"{segment}\". Expected 1 value (implicit: mean) or 3 values (explicit: min, max, mean). Ignoring."
                        ),
                    )
                    .with_data(tokens.iter().cloned()),
                );
                None
            }
        }
    }
}

fn parse_implicit(token: &str, diagnostics: &mut Diagnostics) -> Option<MeanIndicator> {
    let Some(value) = parse_number(token) else {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::InvalidMean,
                format!("Invalid mean value \"{token}\". Ignoring."),
            )
            .with_data([token]),
        );
        return None;
    };
    if value < 0.0 {
        push_negative_mean(value, diagnostics);
        return None;
    }
    MeanIndicator::implicit(value).ok()
}

fn parse_explicit(
    segment: &str,
    min: &str,
    max: &str,
    mean: &str,
    diagnostics: &mut Diagnostics,
) -> Option<MeanIndicator> {
    let (Some(range_min), Some(range_max), Some(value)) =
        (parse_number(min), parse_number(max), parse_number(mean))
    else {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::InvalidMean,
                format!(
                    "Invalid mean specification \"{segment}\". Expected format: \"min, max, mean\". Ignoring."
                ),
            )
            .with_data([min, max, mean]),
        );
        return None;
    };

    if range_min >= range_max {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::MeanRangeInverted,
                format!(
                    "Mean min ({}) >= max ({}). Ignoring.",
                    format_value(range_min),
                    format_value(range_max)
                ),
            )
            .with_data([format_value(range_min), format_value(range_max)]),
        );
        return None;
    }
    if value < 0.0 {
        push_negative_mean(value, diagnostics);
        return None;
    }

    let indicator = MeanIndicator::new(value, range_min, range_max).ok()?;
    if !indicator.is_within_range() {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCategory::MeanOutOfRange,
                format!(
                    "Mean ({}) outside specified range [{}, {}].",
                    format_value(value),
                    format_value(range_min),
                    format_value(range_max)
                ),
            )
            .with_data([
                format_value(value),
                format_value(range_min),
                format_value(range_max),
            ]),
        );
    }
    Some(indicator)
}

fn push_negative_mean(value: f64, diagnostics: &mut Diagnostics) {
    diagnostics.push(
        Diagnostic::new(
            DiagnosticCategory::NegativeMean,
            format!("Negative mean value ({}). Ignoring.", format_value(value)),
        )
        .with_data([format_value(value)]),
    );
}

#[cfg(test)]
mod tests {
    use super::MeanIndicator;

    #[test]
    fn fraction_interpolates_inside_range() {
        let mean = MeanIndicator::new(15.0, 0.0, 20.0).expect("mean");
        assert!((mean.fraction() - 0.75).abs() <= 1e-12);
        assert!(mean.is_within_range());
    }

    #[test]
    fn fraction_survives_ranges_near_f64_limits() {
        let mean = MeanIndicator::new(0.0, -1e308, 1e308).expect("mean");
        assert!((mean.fraction() - 0.5).abs() <= 1e-12);

        let mean = MeanIndicator::new(1e10, 0.0, 1e-300).expect("mean");
        assert_eq!(mean.fraction(), f64::INFINITY);
    }

    #[test]
    fn constructor_enforces_invariants() {
        assert!(MeanIndicator::new(1.0, 5.0, 5.0).is_err());
        assert!(MeanIndicator::new(-1.0, 0.0, 5.0).is_err());
        assert!(MeanIndicator::implicit(f64::INFINITY).is_err());
    }
}
