use std::fmt::Write as _;

use tracing::trace;

use crate::error::PlotResult;
use crate::render::{Color, FrameSegment, RenderFrame, Renderer, TextHAlign};

/// Serializes a `RenderFrame` into a standalone SVG document.
///
/// The document carries one `<path>` for the whole axis frame, one
/// `<path>` per series and one `<text>` per tick label. The last document
/// is kept until the next render call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();

        // `write!` into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        );
        let _ = writeln!(
            out,
            "<style>path {{ fill: none; stroke-width: {}; stroke-linejoin: round; stroke-linecap: round; }} \
             text {{ font-family: sans-serif; font-size: {}px; }}</style>",
            number(frame.stroke_width),
            number(frame.font_size_px)
        );

        if !frame.frame.is_empty() {
            out.push_str(r#"<path class="frame" d=""#);
            out.push_str(&frame_path_data(&frame.frame));
            out.push('"');
            write_paint_attr(&mut out, "stroke", frame.frame_color);
            out.push_str("/>\n");
        }

        for series in &frame.series {
            out.push_str(r#"<path class="series" d=""#);
            out.push_str(&polyline_path_data(&series.points));
            out.push('"');
            write_paint_attr(&mut out, "stroke", series.color);
            out.push_str("/>\n");
        }

        for label in &frame.labels {
            let anchor = match label.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="middle""#,
                number(label.x),
                number(label.y)
            );
            write_paint_attr(&mut out, "fill", frame.label_color);
            out.push('>');
            out.push_str(&escape_xml(&label.text));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");

        trace!(
            bytes = out.len(),
            frame_segments = frame.frame.len(),
            series = frame.series.len(),
            labels = frame.labels.len(),
            "svg document rendered"
        );
        self.document = out;
        Ok(())
    }
}

fn frame_path_data(segments: &[FrameSegment]) -> String {
    let mut d = String::new();
    for segment in segments {
        if !d.is_empty() {
            d.push(' ');
        }
        let line = segment.line;
        let _ = write!(
            d,
            "M{} {} L{} {}",
            number(line.x1),
            number(line.y1),
            number(line.x2),
            number(line.y2)
        );
    }
    d
}

fn polyline_path_data(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (index, (x, y)) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{command}{} {}", number(*x), number(*y));
    }
    d
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let _ = write!(out, r#" {name}="{}""#, color.to_hex());
    if let Some(opacity) = color.opacity() {
        let _ = write!(out, r#" {name}-opacity="{}""#, number(opacity));
    }
}

/// Fixed two-decimal output with trailing zeros trimmed.
///
/// Rust float formatting always uses `.` as the decimal separator.
fn number(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
