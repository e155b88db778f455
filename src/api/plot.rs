use tracing::debug;

use crate::core::{BoundingBox, ChartLayout, DataPoint, Dataset, NormalizedPoint, Projection};
use crate::error::{PlotError, PlotResult};
use crate::render::{RenderFrame, Renderer, SvgRenderer};

use super::frame_builder::build_render_frame;
use super::{LayoutSnapshot, PlotConfig, PlotState};

/// Immutable, ready-to-draw plot.
///
/// Built by [`super::PlotBuilder::build`]; always holds at least one series.
/// Every query takes `&self`, so repeated draws produce identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    dataset: Dataset,
    bounds: BoundingBox,
    config: PlotConfig,
}

impl Plot {
    pub(super) fn new(dataset: Dataset, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let bounds = dataset.bounding_box()?;
        Ok(Self {
            dataset,
            bounds,
            config,
        })
    }

    #[must_use]
    pub fn state(&self) -> PlotState {
        PlotState::Ready
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Tightest box containing every registered point.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Axis ranges, steps and ticks for `tick_count` ticks per axis.
    pub fn layout(&self, tick_count: u32) -> PlotResult<ChartLayout> {
        ChartLayout::compute(self.bounds, tick_count)
    }

    /// Layout with the configured tick count.
    pub fn default_layout(&self) -> PlotResult<ChartLayout> {
        self.layout(self.config.tick_count)
    }

    pub fn projection(&self) -> PlotResult<Projection> {
        Ok(self.default_layout()?.projection())
    }

    /// Maps a data point into the unit square of the configured layout.
    ///
    /// `y` grows downward, so the axis maximum maps to `0`.
    pub fn project(&self, point: DataPoint) -> PlotResult<NormalizedPoint> {
        if !point.is_finite() {
            return Err(PlotError::InvalidArgument(
                "projected point must be finite".to_owned(),
            ));
        }
        Ok(self.projection()?.normalize(point))
    }

    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let layout = self.default_layout()?;
        build_render_frame(&self.dataset, &layout, &self.config)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> PlotResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }

    /// Renders the plot as a standalone SVG document.
    pub fn draw(&self) -> PlotResult<String> {
        let mut renderer = SvgRenderer::new();
        self.render(&mut renderer)?;
        let document = renderer.into_document();
        debug!(
            bytes = document.len(),
            series = self.dataset.len(),
            "plot drawn"
        );
        Ok(document)
    }

    pub fn snapshot(&self) -> PlotResult<LayoutSnapshot> {
        let layout = self.default_layout()?;
        let point_count = self.dataset.series().iter().map(|series| series.len()).sum();
        Ok(LayoutSnapshot::new(
            self.config.viewport,
            &layout,
            self.dataset.len(),
            point_count,
        ))
    }
}
