use serde::{Deserialize, Serialize};

use crate::error::{SparkChartError, SparkChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> SparkChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SparkChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgb(...)`/`rgba(...)` notation with 8-bit channels.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "rgb({}, {}, {})",
                channel(self.red),
                channel(self.green),
                channel(self.blue)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                channel(self.red),
                channel(self.green),
                channel(self.blue),
                self.alpha
            )
        }
    }
}

/// Fill or stroke source for a primitive.
///
/// `CurrentColor` defers to the host element's text color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    #[default]
    CurrentColor,
    Solid(Color),
}

impl Paint {
    pub fn validate(self) -> SparkChartResult<()> {
        match self {
            Self::CurrentColor => Ok(()),
            Self::Solid(color) => color.validate(),
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::CurrentColor => "currentColor".to_owned(),
            Self::Solid(color) => color.to_css(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash_px: f64,
        gap_px: f64,
    },
}

impl LineStrokeStyle {
    fn validate(self) -> SparkChartResult<()> {
        if let Self::Dashed { dash_px, gap_px } = self {
            if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px < 0.0 {
                return Err(SparkChartError::InvalidData(
                    "line dash pattern must be finite with dash > 0 and gap >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub stroke: Paint,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, stroke: Paint) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            stroke,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> SparkChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(SparkChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(SparkChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.stroke.validate()
    }
}

/// Filled axis-aligned rectangle with an optional tooltip title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> SparkChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SparkChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(SparkChartError::InvalidData(
                "rect size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Direction the triangle's apex points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleApex {
    Up,
    Down,
}

/// Isosceles triangle inscribed in its bounding box `(x, y, width, height)`.
///
/// The apex sits at the horizontal center of the box; the base spans the
/// full width on the opposite edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrianglePrimitive {
    pub apex: TriangleApex,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TrianglePrimitive {
    #[must_use]
    pub fn new(apex: TriangleApex, x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self {
            apex,
            x,
            y,
            width,
            height,
            fill,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    /// Vertices as `[base_left, base_right, apex]`.
    #[must_use]
    pub fn vertices(&self) -> [(f64, f64); 3] {
        let left = self.x;
        let right = self.x + self.width;
        let top = self.y;
        let bottom = self.y + self.height;
        match self.apex {
            TriangleApex::Down => [(left, top), (right, top), (self.center_x(), bottom)],
            TriangleApex::Up => [(left, bottom), (right, bottom), (self.center_x(), top)],
        }
    }

    pub fn validate(&self) -> SparkChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SparkChartError::InvalidData(
                "triangle coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(SparkChartError::InvalidData(
                "triangle size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// One ordered draw instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Triangle(TrianglePrimitive),
}

impl Primitive {
    pub fn validate(&self) -> SparkChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Triangle(triangle) => triangle.validate(),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Rect(rect) => rect.title.as_deref(),
            Self::Triangle(triangle) => triangle.title.as_deref(),
            Self::Line(_) => None,
        }
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(rect: RectPrimitive) -> Self {
        Self::Rect(rect)
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(line: LinePrimitive) -> Self {
        Self::Line(line)
    }
}

impl From<TrianglePrimitive> for Primitive {
    fn from(triangle: TrianglePrimitive) -> Self {
        Self::Triangle(triangle)
    }
}
