use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

fn default_dragger_width() -> f64 {
    49.0
}

fn default_initial_anchor_ratio() -> f64 {
    0.8
}

fn default_scale_change_anchor_ratio() -> f64 {
    0.9
}

fn default_viewport_left_margin() -> f64 {
    26.0
}

fn default_viewport_right_margin() -> f64 {
    80.0
}

fn default_window_factor() -> f64 {
    1.5
}

fn default_extension_ratio() -> f64 {
    0.25
}

fn default_far_jump_units() -> f64 {
    5.0
}

/// Tunables of the axis navigation engine.
///
/// Anchor ratios are fractions of the axis width where the anchor instant is
/// placed on a window rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBehavior {
    /// Visual width of a dragger; its pixel position is the left edge.
    #[serde(default = "default_dragger_width")]
    pub dragger_width: f64,
    #[serde(default = "default_initial_anchor_ratio")]
    pub initial_anchor_ratio: f64,
    #[serde(default = "default_scale_change_anchor_ratio")]
    pub scale_change_anchor_ratio: f64,
    /// An external date may move a dragger in place while its new position
    /// stays within `[-viewport_left_margin, axis_width - viewport_right_margin]`.
    #[serde(default = "default_viewport_left_margin")]
    pub viewport_left_margin: f64,
    #[serde(default = "default_viewport_right_margin")]
    pub viewport_right_margin: f64,
    /// Window length as a multiple of the visible tile count.
    #[serde(default = "default_window_factor")]
    pub window_factor: f64,
    /// Share of visible tiles added per grid extension.
    #[serde(default = "default_extension_ratio")]
    pub extension_ratio: f64,
    /// Jumps farther than this many scale units re-center the window.
    #[serde(default = "default_far_jump_units")]
    pub far_jump_units: f64,
}

impl Default for AxisBehavior {
    fn default() -> Self {
        Self {
            dragger_width: default_dragger_width(),
            initial_anchor_ratio: default_initial_anchor_ratio(),
            scale_change_anchor_ratio: default_scale_change_anchor_ratio(),
            viewport_left_margin: default_viewport_left_margin(),
            viewport_right_margin: default_viewport_right_margin(),
            window_factor: default_window_factor(),
            extension_ratio: default_extension_ratio(),
            far_jump_units: default_far_jump_units(),
        }
    }
}

impl AxisBehavior {
    pub(crate) fn validate(self) -> AxisResult<Self> {
        if !self.dragger_width.is_finite() || self.dragger_width < 0.0 {
            return Err(AxisError::InvalidData(
                "dragger width must be finite and >= 0".to_owned(),
            ));
        }
        for (name, ratio) in [
            ("initial anchor ratio", self.initial_anchor_ratio),
            ("scale change anchor ratio", self.scale_change_anchor_ratio),
        ] {
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(AxisError::InvalidData(format!(
                    "{name} must be finite and in [0, 1]"
                )));
            }
        }
        if !self.viewport_left_margin.is_finite() || !self.viewport_right_margin.is_finite() {
            return Err(AxisError::InvalidData(
                "viewport margins must be finite".to_owned(),
            ));
        }
        if !self.window_factor.is_finite() || self.window_factor < 1.0 {
            return Err(AxisError::InvalidData(
                "window factor must be finite and >= 1".to_owned(),
            ));
        }
        if !self.extension_ratio.is_finite()
            || self.extension_ratio <= 0.0
            || self.extension_ratio > 1.0
        {
            return Err(AxisError::InvalidData(
                "extension ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.far_jump_units.is_finite() || self.far_jump_units < 0.0 {
            return Err(AxisError::InvalidData(
                "far jump units must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Anchor ratio used when an external date lands outside the viewport.
    #[must_use]
    pub fn far_jump_anchor_ratio(self, unit_distance: f64, is_past: bool) -> f64 {
        if unit_distance > self.far_jump_units {
            0.5
        } else if is_past {
            0.25
        } else {
            0.75
        }
    }
}
