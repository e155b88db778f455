use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Closed numeric interval `(min, max)` with `min <= max`.
pub type Interval = (f64, f64);

/// Tightest axis-aligned box containing every registered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: Interval,
    pub y: Interval,
}

impl BoundingBox {
    #[must_use]
    pub fn from_point(point: DataPoint) -> Self {
        Self {
            x: (point.x, point.x),
            y: (point.y, point.y),
        }
    }

    #[must_use]
    pub fn contains(self, point: DataPoint) -> bool {
        (self.x.0..=self.x.1).contains(&point.x) && (self.y.0..=self.y.1).contains(&point.y)
    }

    fn include(&mut self, point: DataPoint) {
        self.x.0 = self.x.0.min(point.x);
        self.x.1 = self.x.1.max(point.x);
        self.y.0 = self.y.0.min(point.y);
        self.y.1 = self.y.1.max(point.y);
    }

    fn union(mut self, other: Self) -> Self {
        self.include(DataPoint::new(other.x.0, other.y.0));
        self.include(DataPoint::new(other.x.1, other.y.1));
        self
    }
}

/// An immutable, non-empty polyline in data space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    points: Vec<DataPoint>,
    bounds: BoundingBox,
}

impl PointSeries {
    /// Builds a series from parallel coordinate slices.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::InvalidArgument(format!(
                "series coordinate length mismatch: xs={}, ys={}",
                xs.len(),
                ys.len()
            )));
        }
        let points: Vec<DataPoint> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect();
        Self::from_points(points)
    }

    pub fn from_points(points: Vec<DataPoint>) -> PlotResult<Self> {
        let Some(first) = points.first().copied() else {
            return Err(PlotError::InvalidArgument(
                "series must contain at least one point".to_owned(),
            ));
        };
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(PlotError::InvalidArgument(format!(
                "series point {index} is not finite"
            )));
        }

        let mut bounds = BoundingBox::from_point(first);
        for point in &points[1..] {
            bounds.include(*point);
        }
        Ok(Self { points, bounds })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Accumulates series and the running bounding box over all of them.
///
/// Series are copied in at registration, so callers are free to reuse or drop
/// their buffers afterwards. The box only ever widens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    series: Vec<PointSeries>,
    bounds: Option<BoundingBox>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a series given as parallel `xs`/`ys` slices.
    ///
    /// On error the dataset is left untouched. Any finite value is accepted,
    /// but layout later rejects an axis whose extent `max - min` overflows f64.
    pub fn add_series(&mut self, xs: &[f64], ys: &[f64]) -> PlotResult<()> {
        let series = PointSeries::from_xy(xs, ys)?;
        self.push(series);
        Ok(())
    }

    /// Registers a series given as a slice of points.
    pub fn add_points(&mut self, points: &[DataPoint]) -> PlotResult<()> {
        let series = PointSeries::from_points(points.to_vec())?;
        self.push(series);
        Ok(())
    }

    fn push(&mut self, series: PointSeries) {
        let bounds = match self.bounds {
            Some(current) => current.union(series.bounds()),
            None => series.bounds(),
        };
        trace!(
            points = series.len(),
            series_count = self.series.len() + 1,
            "register series"
        );
        self.bounds = Some(bounds);
        self.series.push(series);
    }

    /// Current bounding box; fails until at least one series was registered.
    pub fn bounding_box(&self) -> PlotResult<BoundingBox> {
        self.bounds.ok_or_else(|| {
            PlotError::InvalidState("bounding box requested before any series was added".to_owned())
        })
    }

    #[must_use]
    pub fn series(&self) -> &[PointSeries] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
