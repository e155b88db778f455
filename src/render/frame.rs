use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, FrameSegment, PolylinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// `frame` holds the range-frame axis lines and tick marks, `series` one
/// polyline per registered series, and `labels` one text per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub stroke_width: f64,
    pub font_size_px: f64,
    pub frame_color: Color,
    pub label_color: Color,
    pub frame: Vec<FrameSegment>,
    pub series: Vec<PolylinePrimitive>,
    pub labels: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, stroke_width: f64, font_size_px: f64) -> Self {
        Self {
            viewport,
            stroke_width,
            font_size_px,
            frame_color: Color::BLACK,
            label_color: Color::BLACK,
            frame: Vec::new(),
            series: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, frame_color: Color, label_color: Color) -> Self {
        self.frame_color = frame_color;
        self.label_color = label_color;
        self
    }

    #[must_use]
    pub fn with_segment(mut self, segment: FrameSegment) -> Self {
        self.frame.push(segment);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: PolylinePrimitive) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: TextPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.frame_color.validate()?;
        self.label_color.validate()?;

        for segment in &self.frame {
            segment.line.validate()?;
        }
        for series in &self.series {
            series.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty() && self.series.is_empty() && self.labels.is_empty()
    }
}
