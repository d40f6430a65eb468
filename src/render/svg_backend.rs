use std::fmt::Write as _;

use crate::error::{SparkChartError, SparkChartResult};
use crate::render::{
    LinePrimitive, LineStrokeStyle, Primitive, RectPrimitive, RenderFrame, Renderer,
    TrianglePrimitive,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub triangles_drawn: usize,
}

/// Renderer that materializes frames into standalone SVG markup.
///
/// The markup of the last rendered frame is kept until the next call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_markup: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn last_markup(&self) -> Option<&str> {
        self.last_markup.as_deref()
    }

    pub fn take_markup(&mut self) -> Option<String> {
        self.last_markup.take()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SparkChartResult<()> {
        frame.validate()?;

        let mut stats = SvgRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Rect(_) => stats.rects_drawn += 1,
                Primitive::Line(_) => stats.lines_drawn += 1,
                Primitive::Triangle(_) => stats.triangles_drawn += 1,
            }
        }

        self.last_markup = Some(frame_to_svg(frame)?);
        self.last_stats = stats;
        Ok(())
    }
}

/// Writes a validated frame as one `<svg>` element.
///
/// Coordinates are rounded to three decimals, so the markup approximates the
/// frame rather than reproducing it exactly.
pub fn frame_to_svg(frame: &RenderFrame) -> SparkChartResult<String> {
    frame.validate()?;

    let mut svg = String::new();
    write!(
        svg,
        r#"<svg xmlns="{SVG_NS}" role="img" aria-label="{}" width="{}" height="{}">"#,
        escape_xml(&frame.accessible_label),
        num(frame.canvas.width),
        num(frame.canvas.height)
    )
    .map_err(map_fmt_error)?;

    for primitive in &frame.primitives {
        let written = match primitive {
            Primitive::Rect(rect) => write_rect(&mut svg, rect),
            Primitive::Line(line) => write_line(&mut svg, line),
            Primitive::Triangle(triangle) => write_triangle(&mut svg, triangle),
        };
        written.map_err(map_fmt_error)?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill.to_css()
    )?;
    close_with_title(svg, "rect", rect.title.as_deref())
}

fn write_line(svg: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.stroke.to_css(),
        num(line.stroke_width)
    )?;
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = line.stroke_style {
        write!(svg, r#" stroke-dasharray="{},{}""#, num(dash_px), num(gap_px))?;
    }
    svg.push_str("/>");
    Ok(())
}

fn write_triangle(svg: &mut String, triangle: &TrianglePrimitive) -> std::fmt::Result {
    let [a, b, apex] = triangle.vertices();
    write!(
        svg,
        r#"<path d="M {} {} L {} {} L {} {} Z" fill="{}""#,
        num(a.0),
        num(a.1),
        num(b.0),
        num(b.1),
        num(apex.0),
        num(apex.1),
        triangle.fill.to_css()
    )?;
    close_with_title(svg, "path", triangle.title.as_deref())
}

fn close_with_title(svg: &mut String, tag: &str, title: Option<&str>) -> std::fmt::Result {
    match title {
        Some(title) => write!(svg, "><title>{}</title></{tag}>", escape_xml(title)),
        None => {
            svg.push_str("/>");
            Ok(())
        }
    }
}

/// Rounds to three decimals; whole numbers print without a fraction.
///
/// Markup is lossy at that precision. `RenderFrame` holds the exact geometry.
fn num(value: f64) -> String {
    let scaled = (value * 1000.0).round() / 1000.0;
    let rounded = if scaled.is_finite() { scaled } else { value };
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn map_fmt_error(err: std::fmt::Error) -> SparkChartError {
    SparkChartError::InvalidData(format!("failed to write svg markup: {err}"))
}
