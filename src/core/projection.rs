use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::dataset::Interval;
use crate::core::{DataPoint, NormalizedPoint, Viewport};
use crate::error::{PlotError, PlotResult};

/// Affine map from data space to normalized `[0, 1]²` plot space.
///
/// Built once per layout from the padded axis ranges and shared by the frame,
/// tick, label and series passes. The y axis is flipped so larger values sit
/// closer to the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    x_axis: Interval,
    y_axis: Interval,
}

impl Projection {
    #[must_use]
    pub fn new(x_axis: Interval, y_axis: Interval) -> Self {
        Self { x_axis, y_axis }
    }

    #[must_use]
    pub fn x_axis(self) -> Interval {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(self) -> Interval {
        self.y_axis
    }

    #[must_use]
    pub fn normalize_x(self, x: f64) -> f64 {
        let (min, max) = self.x_axis;
        (x - min) / (max - min)
    }

    #[must_use]
    pub fn normalize_y(self, y: f64) -> f64 {
        let (min, max) = self.y_axis;
        (max - y) / (max - min)
    }

    #[must_use]
    pub fn normalize(self, point: DataPoint) -> NormalizedPoint {
        NormalizedPoint::new(self.normalize_x(point.x), self.normalize_y(point.y))
    }
}

/// Pixel rectangle that normalized plot space is stretched over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Insets `viewport` by the given margins.
    pub fn from_margins(
        viewport: Viewport,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> PlotResult<Self> {
        let area = Self {
            left,
            top,
            right: f64::from(viewport.width) - right,
            bottom: f64::from(viewport.height) - bottom,
        };
        if !viewport.is_valid() || !(area.width() > 0.0) || !(area.height() > 0.0) {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn to_pixel(self, point: NormalizedPoint) -> (f64, f64) {
        (self.pixel_x(point.x), self.pixel_y(point.y))
    }

    #[must_use]
    pub fn pixel_x(self, normalized_x: f64) -> f64 {
        self.left + normalized_x * self.width()
    }

    #[must_use]
    pub fn pixel_y(self, normalized_y: f64) -> f64 {
        self.top + normalized_y * self.height()
    }
}

/// Projects every point of a series into pixel space, preserving order.
#[must_use]
pub fn project_series(
    points: &[DataPoint],
    projection: Projection,
    area: PlotArea,
) -> Vec<(f64, f64)> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| area.to_pixel(projection.normalize(*point)))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| area.to_pixel(projection.normalize(*point)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotArea, Projection};
    use crate::core::{DataPoint, Viewport};

    #[test]
    fn y_axis_is_flipped() {
        let projection = Projection::new((0.0, 10.0), (0.0, 4.0));
        let top = projection.normalize(DataPoint::new(0.0, 4.0));
        let bottom = projection.normalize(DataPoint::new(10.0, 0.0));
        assert_eq!((top.x, top.y), (0.0, 0.0));
        assert_eq!((bottom.x, bottom.y), (1.0, 1.0));
    }

    #[test]
    fn plot_area_rejects_margins_larger_than_viewport() {
        let result = PlotArea::from_margins(Viewport::new(100, 100), 60.0, 0.0, 60.0, 0.0);
        assert!(result.is_err());
    }
}
