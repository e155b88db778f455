use tracing::debug;

use crate::core::{BoundingBox, DataPoint, Dataset};
use crate::error::{PlotError, PlotResult};

use super::{Plot, PlotConfig};

/// Lifecycle of a plot: builders are `Empty` or `Accumulating`, a built
/// [`Plot`] is `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotState {
    Empty,
    Accumulating,
    Ready,
}

/// Accumulates series before an immutable [`Plot`] is built.
///
/// Series are copied in, so caller buffers may be reused right after
/// registration. A rejected series leaves the builder untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotBuilder {
    dataset: Dataset,
    config: PlotConfig,
}

impl PlotBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Registers a series given as parallel coordinate slices.
    pub fn add_series(mut self, xs: &[f64], ys: &[f64]) -> PlotResult<Self> {
        self.push_series(xs, ys)?;
        Ok(self)
    }

    pub fn add_points(mut self, points: &[DataPoint]) -> PlotResult<Self> {
        self.push_points(points)?;
        Ok(self)
    }

    /// In-place variant of [`Self::add_series`] for loops over many series.
    pub fn push_series(&mut self, xs: &[f64], ys: &[f64]) -> PlotResult<()> {
        self.dataset.add_series(xs, ys)?;
        self.log_accumulated();
        Ok(())
    }

    pub fn push_points(&mut self, points: &[DataPoint]) -> PlotResult<()> {
        self.dataset.add_points(points)?;
        self.log_accumulated();
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> PlotState {
        if self.dataset.is_empty() {
            PlotState::Empty
        } else {
            PlotState::Accumulating
        }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn bounding_box(&self) -> PlotResult<BoundingBox> {
        self.dataset.bounding_box()
    }

    /// Freezes the accumulated series into a [`Plot`].
    pub fn build(self) -> PlotResult<Plot> {
        if self.dataset.is_empty() {
            return Err(PlotError::InvalidState(
                "cannot build a plot without any series".to_owned(),
            ));
        }
        Plot::new(self.dataset, self.config)
    }

    /// Draws the current series without consuming the builder.
    pub fn draw(&self) -> PlotResult<String> {
        self.clone().build()?.draw()
    }

    fn log_accumulated(&self) {
        if let Ok(bounds) = self.dataset.bounding_box() {
            debug!(
                series = self.dataset.len(),
                x_min = bounds.x.0,
                x_max = bounds.x.1,
                y_min = bounds.y.0,
                y_max = bounds.y.1,
                "series registered"
            );
        }
    }
}
