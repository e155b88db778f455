use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::dataset::{BoundingBox, Interval};
use crate::core::nice::{nice_step, raw_step};
use crate::core::projection::Projection;
use crate::error::{PlotError, PlotResult};

/// Upper bound on the requested tick count; larger requests are caller bugs.
pub const MAX_TICK_COUNT: u32 = 10_000;

/// Quotients this close to an integer are treated as exact multiples.
const QUOTIENT_SNAP_EPSILON: f64 = 1e-9;

pub type TickValues = SmallVec<[f64; 8]>;

/// Layout of one axis: nice step, padded axis range and in-range ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    data_range: Interval,
    axis_range: Interval,
    step: Option<f64>,
    ticks: TickValues,
}

impl AxisLayout {
    /// Lays out one axis for the data interval `data_range`.
    ///
    /// A zero-width interval yields a tick-less axis whose range is centered on
    /// the single value, so normalizing never divides by zero.
    ///
    /// `max - min` must be finite: a range such as `[-1e308, 1e308]` is
    /// rejected. When rounding out to the step would overflow, the axis range
    /// falls back to the data range.
    pub fn compute(data_range: Interval, tick_count: u32) -> PlotResult<Self> {
        validate_tick_count(tick_count)?;
        let (min, max) = data_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidArgument(format!(
                "axis data range must be finite and ordered, got [{min}, {max}]"
            )));
        }

        let span = max - min;
        if !span.is_finite() {
            return Err(PlotError::InvalidArgument(format!(
                "axis data range [{min}, {max}] is too wide to lay out"
            )));
        }

        let raw = raw_step(span, tick_count)?;
        if raw <= 0.0 {
            return Ok(Self::degenerate(min));
        }
        let step = nice_step(raw)?;

        let first = snapped_ceil(min / step);
        let last = snapped_floor(max / step);
        let mut axis_range = (
            (step * snapped_floor(min / step)).min(min),
            (step * snapped_ceil(max / step)).max(max),
        );
        if !(axis_range.1 - axis_range.0).is_finite() {
            // Rounding out near f64::MAX overflows; the data range is the widest finite frame.
            warn!(min, max, step, "padded axis range overflows; using data range");
            axis_range = (min, max);
        }

        let ticks: TickValues = if first <= last {
            let count = (last - first) as u64;
            (0..=count)
                .map(|index| (step * (first + index as f64)).clamp(min, max))
                .collect()
        } else {
            TickValues::new()
        };

        debug!(
            min,
            max,
            raw,
            step,
            axis_min = axis_range.0,
            axis_max = axis_range.1,
            ticks = ticks.len(),
            "axis layout"
        );

        Ok(Self {
            data_range,
            axis_range,
            step: Some(step),
            ticks,
        })
    }

    fn degenerate(value: f64) -> Self {
        let half = value.abs().max(1.0) * 0.5;
        warn!(value, "degenerate axis range; skipping tick generation");
        let axis_range = if (value - half).is_finite() && (value + half).is_finite() {
            (value - half, value + half)
        } else if value > 0.0 {
            (value - 2.0 * half, value)
        } else {
            (value, value + 2.0 * half)
        };
        Self {
            data_range: (value, value),
            axis_range,
            step: None,
            ticks: TickValues::new(),
        }
    }

    /// Data extent along this axis; range-frame lines span exactly this.
    #[must_use]
    pub fn data_range(&self) -> Interval {
        self.data_range
    }

    /// Outward-rounded interval the projection is sized by.
    #[must_use]
    pub fn axis_range(&self) -> Interval {
        self.axis_range
    }

    /// Nice tick step; `None` for a degenerate (zero-width) axis.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.step.is_none()
    }

    /// Position of `value` within the axis range, `0` at `axis_min`.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let (axis_min, axis_max) = self.axis_range;
        (value - axis_min) / (axis_max - axis_min)
    }
}

/// Both axis layouts for one draw, computed from the same bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x: AxisLayout,
    pub y: AxisLayout,
    pub tick_count: u32,
}

impl ChartLayout {
    pub fn compute(bbox: BoundingBox, tick_count: u32) -> PlotResult<Self> {
        Ok(Self {
            x: AxisLayout::compute(bbox.x, tick_count)?,
            y: AxisLayout::compute(bbox.y, tick_count)?,
            tick_count,
        })
    }

    /// The single data-to-normalized transform shared by every draw pass.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection::new(self.x.axis_range(), self.y.axis_range())
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.x.data_range(),
            y: self.y.data_range(),
        }
    }
}

/// Serializable view of an axis layout used by snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayoutSummary {
    pub data_range: Interval,
    pub axis_range: Interval,
    pub step: Option<f64>,
    pub ticks: Vec<f64>,
}

impl From<&AxisLayout> for AxisLayoutSummary {
    fn from(layout: &AxisLayout) -> Self {
        Self {
            data_range: layout.data_range,
            axis_range: layout.axis_range,
            step: layout.step,
            ticks: layout.ticks.to_vec(),
        }
    }
}

pub(crate) fn validate_tick_count(tick_count: u32) -> PlotResult<()> {
    if !(2..=MAX_TICK_COUNT).contains(&tick_count) {
        return Err(PlotError::InvalidArgument(format!(
            "tick count must be in [2, {MAX_TICK_COUNT}], got {tick_count}"
        )));
    }
    Ok(())
}

fn snapped_floor(quotient: f64) -> f64 {
    let rounded = quotient.round();
    if (quotient - rounded).abs() <= QUOTIENT_SNAP_EPSILON {
        rounded
    } else {
        quotient.floor()
    }
}

fn snapped_ceil(quotient: f64) -> f64 {
    let rounded = quotient.round();
    if (quotient - rounded).abs() <= QUOTIENT_SNAP_EPSILON {
        rounded
    } else {
        quotient.ceil()
    }
}
