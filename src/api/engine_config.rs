use serde::{Deserialize, Serialize};

use crate::core::EmScale;
use crate::error::{SparkChartError, SparkChartResult};
use crate::render::Paint;

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkChartConfig {
    #[serde(default = "default_bar_width_em")]
    pub bar_width_em: f64,
    #[serde(default = "default_gap_em")]
    pub gap_em: f64,
    #[serde(default = "default_height_em")]
    pub height_em: f64,
    #[serde(default = "default_mean_marker_height_em")]
    pub mean_marker_height_em: f64,
    /// Suppresses diagnostics publication. Outcomes still carry them.
    #[serde(default)]
    pub quiet: bool,
    #[serde(default = "default_fallback_font_size_px")]
    pub fallback_font_size_px: f64,
    #[serde(default)]
    pub fallback_paint: Paint,
    #[serde(default = "default_mean_line_dash")]
    pub mean_line_dash: [f64; 2],
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
    #[serde(default = "default_min_bar_height_px")]
    pub min_bar_height_px: f64,
}

impl Default for SparkChartConfig {
    fn default() -> Self {
        Self {
            bar_width_em: default_bar_width_em(),
            gap_em: default_gap_em(),
            height_em: default_height_em(),
            mean_marker_height_em: default_mean_marker_height_em(),
            quiet: false,
            fallback_font_size_px: default_fallback_font_size_px(),
            fallback_paint: Paint::CurrentColor,
            mean_line_dash: default_mean_line_dash(),
            line_width_px: default_line_width_px(),
            min_bar_height_px: default_min_bar_height_px(),
        }
    }
}

impl SparkChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all em multipliers at once.
    #[must_use]
    pub fn with_em_scale(mut self, em: EmScale) -> Self {
        self.bar_width_em = em.bar_width_em;
        self.gap_em = em.gap_em;
        self.height_em = em.height_em;
        self.mean_marker_height_em = em.mean_marker_height_em;
        self
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn with_fallback_font_size_px(mut self, font_size_px: f64) -> Self {
        self.fallback_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_fallback_paint(mut self, paint: Paint) -> Self {
        self.fallback_paint = paint;
        self
    }

    #[must_use]
    pub fn with_mean_line_dash(mut self, dash_px: f64, gap_px: f64) -> Self {
        self.mean_line_dash = [dash_px, gap_px];
        self
    }

    #[must_use]
    pub fn with_line_width_px(mut self, width_px: f64) -> Self {
        self.line_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_min_bar_height_px(mut self, height_px: f64) -> Self {
        self.min_bar_height_px = height_px;
        self
    }

    #[must_use]
    pub fn em_scale(self) -> EmScale {
        EmScale {
            bar_width_em: self.bar_width_em,
            gap_em: self.gap_em,
            height_em: self.height_em,
            mean_marker_height_em: self.mean_marker_height_em,
        }
    }

    pub fn validate(self) -> SparkChartResult<Self> {
        self.em_scale().validate()?;
        for (name, value) in [
            ("fallback_font_size_px", self.fallback_font_size_px),
            ("line_width_px", self.line_width_px),
            ("min_bar_height_px", self.min_bar_height_px),
            ("mean_line_dash[0]", self.mean_line_dash[0]),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SparkChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.mean_line_dash[1].is_finite() || self.mean_line_dash[1] < 0.0 {
            return Err(SparkChartError::InvalidConfig(
                "`mean_line_dash[1]` must be finite and >= 0".to_owned(),
            ));
        }
        self.fallback_paint
            .validate()
            .map_err(|e| SparkChartError::InvalidConfig(format!("`fallback_paint`: {e}")))?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> SparkChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| SparkChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SparkChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SparkChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_bar_width_em() -> f64 {
    1.0
}

fn default_gap_em() -> f64 {
    0.2
}

fn default_height_em() -> f64 {
    2.0
}

fn default_mean_marker_height_em() -> f64 {
    0.6
}

fn default_fallback_font_size_px() -> f64 {
    16.0
}

fn default_mean_line_dash() -> [f64; 2] {
    [2.0, 2.0]
}

fn default_line_width_px() -> f64 {
    1.0
}

fn default_min_bar_height_px() -> f64 {
    1.0
}
