use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AxisCoordinateSpace, AxisGeometry, DraggerId, TimeScale, TimeScaleGridWidths,
    TimelineLimits, VisibleRange,
};
use crate::extensions::AxisListener;
use crate::interaction::{InteractionState, PanExtensionPolicy};

use super::animation_range::AnimationRangeState;
use super::{AxisBehavior, DraggerPair};

/// Host-owned selected dates as last reported to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDates {
    pub primary: DateTime<Utc>,
    pub secondary: Option<DateTime<Utc>>,
}

impl SelectedDates {
    /// The secondary dragger shadows the primary date until a compare date exists.
    #[must_use]
    pub fn date_for(self, id: DraggerId) -> DateTime<Utc> {
        match id {
            DraggerId::Primary => self.primary,
            DraggerId::Secondary => self.secondary.unwrap_or(self.primary),
        }
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `AxisEngine` is the only writer of the grid window, the axis geometry and
/// the draggers. Helpers receive read-only views and return proposals.
pub struct AxisEngine {
    pub(super) behavior: AxisBehavior,
    pub(super) grid_widths: TimeScaleGridWidths,
    pub(super) limits: TimelineLimits,
    pub(super) scale: TimeScale,
    pub(super) has_subdaily_layers: bool,
    pub(super) range: VisibleRange,
    pub(super) geometry: AxisGeometry,
    pub(super) pan_policy: PanExtensionPolicy,
    pub(super) sentinel: f64,
    pub(super) draggers: DraggerPair,
    pub(super) selected: DraggerId,
    pub(super) compare_mode_active: bool,
    pub(super) external: SelectedDates,
    /// External dates received while a gesture owned the draggers.
    pub(super) deferred_external: Option<SelectedDates>,
    pub(super) animation: Option<AnimationRangeState>,
    pub(super) interaction: InteractionState,
    pub(super) listeners: IndexMap<String, Box<dyn AxisListener>>,
}

impl AxisEngine {
    pub(super) fn coordinate_space(&self) -> AxisCoordinateSpace {
        let front = self.range.front_instant().unwrap_or(self.limits.start);
        self.geometry.coordinate_space(self.scale, front)
    }

    /// Secondary dragger only takes part outside compare mode when selected.
    pub(super) fn participates(&self, id: DraggerId) -> bool {
        self.compare_mode_active || id == self.selected
    }
}
