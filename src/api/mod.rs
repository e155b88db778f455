mod frame_builder;
mod label_format;
mod layout_snapshot;
mod plot;
mod plot_builder;
mod plot_config;

pub use frame_builder::{PlotMargins, build_render_frame};
pub use label_format::{
    TickNotation, axis_tick_labels, estimate_label_width, format_tick_label, precision_from_step,
};
pub use layout_snapshot::{
    AxisSnapshot, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1,
};
pub use plot::Plot;
pub use plot_builder::{PlotBuilder, PlotState};
pub use plot_config::PlotConfig;
