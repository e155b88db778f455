use serde::{Deserialize, Serialize};

use crate::core::{MAX_TICK_COUNT, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Public plot configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format. Every field has a default, so a
/// partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_tick_count")]
    pub tick_count: u32,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_tick_length_px")]
    pub tick_length_px: f64,
    #[serde(default = "default_label_padding_px")]
    pub label_padding_px: f64,
    /// Minimum distance between consecutive drawn series points; `0` keeps all.
    #[serde(default)]
    pub subsample_distance: f64,
    #[serde(default = "default_series_colors")]
    pub series_colors: Vec<Color>,
    #[serde(default)]
    pub axis_color: Color,
    #[serde(default)]
    pub label_color: Color,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            tick_count: default_tick_count(),
            font_size_px: default_font_size_px(),
            stroke_width: default_stroke_width(),
            tick_length_px: default_tick_length_px(),
            label_padding_px: default_label_padding_px(),
            subsample_distance: 0.0,
            series_colors: default_series_colors(),
            axis_color: Color::BLACK,
            label_color: Color::BLACK,
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: u32) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_subsample_distance(mut self, distance: f64) -> Self {
        self.subsample_distance = distance;
        self
    }

    #[must_use]
    pub fn with_series_colors(mut self, colors: Vec<Color>) -> Self {
        self.series_colors = colors;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !(2..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(PlotError::InvalidConfig(format!(
                "tick_count must be in [2, {MAX_TICK_COUNT}], got {}",
                self.tick_count
            )));
        }
        require_positive("font_size_px", self.font_size_px)?;
        require_positive("stroke_width", self.stroke_width)?;
        require_non_negative("tick_length_px", self.tick_length_px)?;
        require_non_negative("label_padding_px", self.label_padding_px)?;
        require_non_negative("subsample_distance", self.subsample_distance)?;

        if self.series_colors.is_empty() {
            return Err(PlotError::InvalidConfig(
                "series_colors must contain at least one color".to_owned(),
            ));
        }
        for color in self
            .series_colors
            .iter()
            .chain([&self.axis_color, &self.label_color])
        {
            color
                .validate()
                .map_err(|e| PlotError::InvalidConfig(e.to_string()))?;
        }
        Ok(())
    }

    /// Color used for the series at `index`, cycling through the palette.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_colors.is_empty() {
            return Color::BLACK;
        }
        self.series_colors[index % self.series_colors.len()]
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn require_positive(name: &str, value: f64) -> PlotResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlotError::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> PlotResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlotError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

fn default_tick_count() -> u32 {
    4
}

fn default_font_size_px() -> f64 {
    20.0
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_tick_length_px() -> f64 {
    6.0
}

fn default_label_padding_px() -> f64 {
    4.0
}

fn default_series_colors() -> Vec<Color> {
    vec![Color::BLACK]
}
