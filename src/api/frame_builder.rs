use tracing::debug;

use crate::core::{ChartLayout, Dataset, PlotArea, project_series, subsample_by_distance};
use crate::error::PlotResult;
use crate::render::{
    FrameSegment, FrameSegmentKind, LinePrimitive, PolylinePrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::PlotConfig;
use super::label_format::{axis_tick_labels, estimate_label_width};

/// Share of the viewport kept free above and right of the plot area.
const OUTER_MARGIN_RATIO: f64 = 0.01;

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotMargins {
    /// Left margin fits the widest y label; bottom fits one line of x labels.
    #[must_use]
    pub fn resolve(config: &PlotConfig, y_labels: &[String]) -> Self {
        let font = config.font_size_px;
        let widest_y_label = y_labels
            .iter()
            .map(|label| estimate_label_width(label, font))
            .fold(0.0, f64::max);
        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);

        Self {
            left: widest_y_label + config.tick_length_px + 2.0 * config.label_padding_px,
            top: height * OUTER_MARGIN_RATIO,
            right: width * OUTER_MARGIN_RATIO,
            bottom: font + config.tick_length_px + 2.0 * config.label_padding_px,
        }
    }

    pub fn plot_area(self, config: &PlotConfig) -> PlotResult<PlotArea> {
        PlotArea::from_margins(config.viewport, self.left, self.top, self.right, self.bottom)
    }
}

/// Materializes the full scene for one draw pass.
///
/// Range-frame lines span the data bounding box while ticks, labels and
/// series all go through the one projection sized by the axis ranges.
pub fn build_render_frame(
    dataset: &Dataset,
    layout: &ChartLayout,
    config: &PlotConfig,
) -> PlotResult<RenderFrame> {
    let x_labels = axis_tick_labels(&layout.x);
    let y_labels = axis_tick_labels(&layout.y);

    let margins = PlotMargins::resolve(config, &y_labels);
    let area = margins.plot_area(config)?;
    let projection = layout.projection();
    let bbox = layout.bounding_box();

    let mut frame = RenderFrame::new(config.viewport, config.stroke_width, config.font_size_px)
        .with_colors(config.axis_color, config.label_color);

    let x_axis_y = area.bottom;
    let y_axis_x = area.left;
    frame = frame
        .with_segment(FrameSegment {
            kind: FrameSegmentKind::AxisLine,
            line: LinePrimitive::new(
                area.pixel_x(projection.normalize_x(bbox.x.0)),
                x_axis_y,
                area.pixel_x(projection.normalize_x(bbox.x.1)),
                x_axis_y,
            ),
        })
        .with_segment(FrameSegment {
            kind: FrameSegmentKind::AxisLine,
            line: LinePrimitive::new(
                y_axis_x,
                area.pixel_y(projection.normalize_y(bbox.y.0)),
                y_axis_x,
                area.pixel_y(projection.normalize_y(bbox.y.1)),
            ),
        });

    let tick_length = config.tick_length_px;
    let padding = config.label_padding_px;

    for (tick, label) in layout.x.ticks().iter().zip(x_labels) {
        let px = area.pixel_x(projection.normalize_x(*tick));
        frame = frame
            .with_segment(FrameSegment {
                kind: FrameSegmentKind::TickMark,
                line: LinePrimitive::new(px, x_axis_y, px, x_axis_y + tick_length),
            })
            .with_label(TextPrimitive::new(
                label,
                px,
                x_axis_y + tick_length + padding + config.font_size_px * 0.5,
                TextHAlign::Center,
            ));
    }

    for (tick, label) in layout.y.ticks().iter().zip(y_labels) {
        let py = area.pixel_y(projection.normalize_y(*tick));
        frame = frame
            .with_segment(FrameSegment {
                kind: FrameSegmentKind::TickMark,
                line: LinePrimitive::new(y_axis_x, py, y_axis_x - tick_length, py),
            })
            .with_label(TextPrimitive::new(
                label,
                y_axis_x - tick_length - padding,
                py,
                TextHAlign::Right,
            ));
    }

    let mut drawn_points = 0usize;
    for (index, series) in dataset.series().iter().enumerate() {
        let projected = project_series(series.points(), projection, area);
        let kept = subsample_by_distance(&projected, config.subsample_distance);
        drawn_points += kept.len();
        frame = frame.with_series(PolylinePrimitive::new(kept, config.series_color(index)));
    }

    debug!(
        left = margins.left,
        bottom = margins.bottom,
        plot_width = area.width(),
        plot_height = area.height(),
        series = dataset.len(),
        drawn_points,
        labels = frame.labels.len(),
        "render frame built"
    );

    Ok(frame)
}
