use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DraggerId, TimeScale, TimeScaleGridWidths, TimelineLimits};

use super::{AnimationRange, AxisBehavior};

fn default_selected_dragger() -> DraggerId {
    DraggerId::Primary
}

fn default_behavior() -> AxisBehavior {
    AxisBehavior::default()
}

fn default_grid_widths() -> TimeScaleGridWidths {
    TimeScaleGridWidths::default()
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load axis
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisEngineConfig {
    pub limits: TimelineLimits,
    pub scale: TimeScale,
    pub axis_width: f64,
    pub primary_date: DateTime<Utc>,
    #[serde(default)]
    pub secondary_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub compare_mode_active: bool,
    #[serde(default = "default_selected_dragger")]
    pub selected_dragger: DraggerId,
    #[serde(default)]
    pub has_subdaily_layers: bool,
    #[serde(default)]
    pub animation_range: Option<AnimationRange>,
    #[serde(default = "default_behavior")]
    pub behavior: AxisBehavior,
    #[serde(default = "default_grid_widths")]
    pub grid_widths: TimeScaleGridWidths,
}

impl AxisEngineConfig {
    /// Creates a single-date config with default behavior.
    #[must_use]
    pub fn new(
        limits: TimelineLimits,
        scale: TimeScale,
        axis_width: f64,
        primary_date: DateTime<Utc>,
    ) -> Self {
        Self {
            limits,
            scale,
            axis_width,
            primary_date,
            secondary_date: None,
            compare_mode_active: false,
            selected_dragger: default_selected_dragger(),
            has_subdaily_layers: false,
            animation_range: None,
            behavior: default_behavior(),
            grid_widths: default_grid_widths(),
        }
    }

    /// Sets the compare date and turns compare mode on.
    #[must_use]
    pub fn with_compare_date(mut self, secondary_date: DateTime<Utc>) -> Self {
        self.secondary_date = Some(secondary_date);
        self.compare_mode_active = true;
        self
    }

    #[must_use]
    pub fn with_selected_dragger(mut self, dragger: DraggerId) -> Self {
        self.selected_dragger = dragger;
        self
    }

    /// Enables hour/minute zoom levels for wheel navigation.
    #[must_use]
    pub fn with_subdaily_layers(mut self, has_subdaily_layers: bool) -> Self {
        self.has_subdaily_layers = has_subdaily_layers;
        self
    }

    #[must_use]
    pub fn with_animation_range(mut self, range: AnimationRange) -> Self {
        self.animation_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: AxisBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_grid_widths(mut self, grid_widths: TimeScaleGridWidths) -> Self {
        self.grid_widths = grid_widths;
        self
    }
}
