use crate::error::PlotResult;
use crate::render::{FrameSegmentKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without parsing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_axis_line_count: usize,
    pub last_tick_mark_count: usize,
    pub last_series_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        let count = |kind| frame.frame.iter().filter(|segment| segment.kind == kind).count();
        self.last_axis_line_count = count(FrameSegmentKind::AxisLine);
        self.last_tick_mark_count = count(FrameSegmentKind::TickMark);
        self.last_series_count = frame.series.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
