use serde::{Deserialize, Serialize};

use crate::core::{AxisGeometry, DraggerId, GridCell, TimeScale, TimelineLimits};
use crate::interaction::HoverState;

use super::{AnimationRange, DraggerPair, SelectedDates};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub scale: TimeScale,
    pub limits: TimelineLimits,
    pub geometry: AxisGeometry,
    pub cells: Vec<GridCell>,
    pub sentinel_counter: f64,
    pub draggers: DraggerPair,
    pub selected_dragger: DraggerId,
    pub compare_mode_active: bool,
    pub selected_dates: SelectedDates,
    pub hover: HoverState,
    #[serde(default)]
    pub animation_range: Option<AnimationRange>,
    #[serde(default)]
    pub listener_ids: Vec<String>,
}
