use crate::error::{AxisError, AxisResult};

use super::{AxisEngine, AxisSnapshot};

impl AxisEngine {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            scale: self.scale,
            limits: self.limits,
            geometry: self.geometry,
            cells: self.range.iter().cloned().collect(),
            sentinel_counter: self.sentinel,
            draggers: self.draggers,
            selected_dragger: self.selected,
            compare_mode_active: self.compare_mode_active,
            selected_dates: self.external,
            hover: self.interaction.hover(),
            animation_range: self.animation_range(),
            listener_ids: self.listeners.keys().cloned().collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
