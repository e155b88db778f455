pub mod axis_layout;
pub mod dataset;
pub mod nice;
pub mod projection;
pub mod subsample;
pub mod types;

pub use axis_layout::{AxisLayout, AxisLayoutSummary, ChartLayout, MAX_TICK_COUNT};
pub use dataset::{BoundingBox, Dataset, Interval, PointSeries};
pub use nice::nice_step;
pub use projection::{PlotArea, Projection, project_series};
pub use subsample::subsample_by_distance;
pub use types::{DataPoint, NormalizedPoint, Viewport};
