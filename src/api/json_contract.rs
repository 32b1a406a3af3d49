use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{VisibleRange, validate_axis_geometry};
use crate::error::{AxisError, AxisResult};

use super::{AxisEngine, AxisSnapshot};

pub const AXIS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: AxisSnapshot,
}

impl AxisSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = AxisSnapshotJsonContractV1 {
            schema_version: AXIS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or the versioned envelope, then checks
    /// that the cell window is one the engine could have produced.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;

        let snapshot = match value.get("schema_version").and_then(Value::as_u64) {
            Some(version) if version == u64::from(AXIS_SNAPSHOT_JSON_SCHEMA_V1) => {
                serde_json::from_value::<AxisSnapshotJsonContractV1>(value)
                    .map(|payload| payload.snapshot)
            }
            Some(version) => {
                return Err(AxisError::InvalidData(format!(
                    "unsupported snapshot schema version: {version}"
                )));
            }
            None => serde_json::from_value::<AxisSnapshot>(value),
        }
        .map_err(|e| {
            AxisError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;

        snapshot.validate_window()?;
        Ok(snapshot)
    }

    /// Limits ordered, geometry usable, cells ascending, gap free, aligned to
    /// the scale and inside the limits.
    pub fn validate_window(&self) -> AxisResult<()> {
        if self.limits.start >= self.limits.end {
            return Err(AxisError::InvalidLimits {
                start: self.limits.start,
                end: self.limits.end,
            });
        }
        validate_axis_geometry(self.geometry.axis_width, self.geometry.grid_width)?;

        if let Some(cell) = self.cells.iter().find(|cell| {
            !self.limits.contains(cell.raw_instant)
                || self.scale.start_of(cell.raw_instant) != cell.raw_instant
        }) {
            return Err(AxisError::InvalidData(format!(
                "snapshot cell {} is outside the limits or off a `{:?}` boundary",
                cell.raw_instant, self.scale
            )));
        }

        let range: VisibleRange = self.cells.iter().cloned().collect();
        if !range.is_contiguous(self.scale) {
            return Err(AxisError::InvalidData(format!(
                "snapshot cells are not one contiguous `{:?}` window",
                self.scale
            )));
        }
        Ok(())
    }
}

impl AxisEngine {
    pub fn snapshot_json_contract_v1_pretty(&self) -> AxisResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
