//! rangeframe: minimalist range-frame line plots rendered to SVG.
//!
//! Series are accumulated by a [`PlotBuilder`], frozen into an immutable
//! [`Plot`], laid out with nice-number axis steps and drawn through a
//! backend-agnostic [`render::RenderFrame`]. Axis lines span only the data
//! extent while ticks sit on multiples of the chosen step.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LayoutSnapshot, Plot, PlotBuilder, PlotConfig, PlotState};
pub use error::{PlotError, PlotResult};
