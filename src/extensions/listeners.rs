use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DraggerId, TimeScale};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisContext {
    pub scale: TimeScale,
    pub axis_width: f64,
    pub front_instant: Option<DateTime<Utc>>,
    pub back_instant: Option<DateTime<Utc>>,
    pub cells_len: usize,
    pub selected_dragger: DraggerId,
    pub compare_mode_active: bool,
    pub interaction_mode: InteractionMode,
}

/// Notifications emitted by the axis engine to its host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisEvent {
    /// A dragger committed a new instant (drag or axis click).
    DateChanged {
        instant: DateTime<Utc>,
        dragger: DraggerId,
    },
    /// Wheel zoom asks the host to switch scale.
    ScaleChangeRequested {
        next_scale_index: u8,
        next_scale: TimeScale,
    },
    /// The user picked the inactive dragger.
    SelectedDraggerChangeRequested { dragger: DraggerId },
    AnimationRangeChanged {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    WindowRebuilt { cells_len: usize },
    WindowExtended { added: usize, removed: usize },
}

/// Host hook for axis notifications.
///
/// Listeners observe events and read the engine context; they never mutate
/// axis state directly.
pub trait AxisListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: AxisEvent, context: AxisContext);
}
