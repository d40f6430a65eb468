use serde::{Deserialize, Serialize};
use tracing::trace;

/// Rendering mode selected per host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    /// Bars grow upward from the bottom edge.
    #[default]
    Bars,
    /// Each value is mirrored above and below a centered baseline.
    Tone,
}

impl ChartMode {
    /// Resolves the mode from a host attribute value.
    ///
    /// Only `"tone"` selects tone mode. A missing attribute, `"bars"`, or any
    /// unrecognized value falls back to bars.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("tone") => Self::Tone,
            None | Some("") | Some("bars") => Self::Bars,
            Some(other) => {
                trace!(mode = other, "unknown chart mode, using bars");
                Self::Bars
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Tone => "tone",
        }
    }
}

/// Overall pixel size of one chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
