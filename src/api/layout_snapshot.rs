use serde::{Deserialize, Serialize};

use crate::core::{AxisLayout, AxisLayoutSummary, BoundingBox, ChartLayout, Viewport};
use crate::error::{PlotError, PlotResult};

use super::label_format::axis_tick_labels;

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// One axis as seen by a snapshot consumer: layout plus rendered label texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    #[serde(flatten)]
    pub layout: AxisLayoutSummary,
    pub labels: Vec<String>,
}

impl From<&AxisLayout> for AxisSnapshot {
    fn from(axis: &AxisLayout) -> Self {
        Self {
            layout: AxisLayoutSummary::from(axis),
            labels: axis_tick_labels(axis),
        }
    }
}

/// Deterministic, serializable summary of a plot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub tick_count: u32,
    pub bounding_box: BoundingBox,
    pub x: AxisSnapshot,
    pub y: AxisSnapshot,
    pub series_count: usize,
    pub point_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        layout: &ChartLayout,
        series_count: usize,
        point_count: usize,
    ) -> Self {
        Self {
            viewport,
            tick_count: layout.tick_count,
            bounding_box: layout.bounding_box(),
            x: AxisSnapshot::from(&layout.x),
            y: AxisSnapshot::from(&layout.y),
            series_count,
            point_count,
        }
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize layout snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize layout snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot and the versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse layout snapshot json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported layout snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
