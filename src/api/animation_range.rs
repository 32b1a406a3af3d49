use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::coordinate::offset_by_millis;
use crate::core::{AxisCoordinateSpace, TimelineLimits};
use crate::error::{AxisError, AxisResult};
use crate::extensions::AxisEvent;
use crate::interaction::InteractionMode;

use super::AxisEngine;
use super::validation::{clamp_date_to_limits, validate_pixel_delta};

/// Playback window shown as two handles on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Animation range plus the screen x of both handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct AnimationRangeState {
    pub(crate) range: AnimationRange,
    pub(crate) start_location: f64,
    pub(crate) end_location: f64,
}

impl AnimationRangeState {
    pub(crate) fn shift(&mut self, delta: f64) {
        self.start_location += delta;
        self.end_location += delta;
    }
}

/// Instant of a handle moved by `delta` pixels from `location`.
fn moved_handle_instant(
    time: DateTime<Utc>,
    location: f64,
    delta: f64,
    space: AxisCoordinateSpace,
) -> AxisResult<DateTime<Utc>> {
    match space.scale.fixed_millis() {
        Some(unit) => Ok(offset_by_millis(time, delta * unit as f64 / space.grid_width)),
        None => space.axis_x_to_instant(location + delta),
    }
}

/// Keeps a handle inside the limits; a clamped handle also keeps its old location.
fn clamp_handle(
    limits: TimelineLimits,
    time: DateTime<Utc>,
    location: f64,
    previous_location: f64,
) -> (DateTime<Utc>, f64) {
    if limits.contains(time) {
        (time, location)
    } else {
        (limits.clamp(time), previous_location)
    }
}

impl AxisEngine {
    #[must_use]
    pub fn animation_range(&self) -> Option<AnimationRange> {
        self.animation.map(|state| state.range)
    }

    /// Screen x of the start and end handles.
    #[must_use]
    pub fn animation_locations(&self) -> Option<(f64, f64)> {
        self.animation
            .map(|state| (state.start_location, state.end_location))
    }

    /// Sets the host-owned animation range, ignored while the handles are
    /// being dragged.
    pub fn set_animation_range(&mut self, range: Option<AnimationRange>) -> AxisResult<()> {
        if self.interaction.mode() == InteractionMode::DraggingAnimationRange {
            debug!("ignoring animation range update during handle drag");
            return Ok(());
        }
        let Some(range) = range else {
            self.animation = None;
            return Ok(());
        };
        if range.start > range.end {
            return Err(AxisError::InvalidData(
                "animation range start must not be after its end".to_owned(),
            ));
        }
        let range = AnimationRange {
            start: clamp_date_to_limits(self.limits, range.start, "animation_start"),
            end: clamp_date_to_limits(self.limits, range.end, "animation_end"),
        };
        let space = self.coordinate_space();
        self.animation = Some(AnimationRangeState {
            range,
            start_location: space.instant_to_axis_x(range.start)?,
            end_location: space.instant_to_axis_x(range.end)?,
        });
        Ok(())
    }

    pub(super) fn relocate_animation_range(&mut self) -> AxisResult<()> {
        let Some(state) = self.animation else {
            return Ok(());
        };
        let space = self.coordinate_space();
        self.animation = Some(AnimationRangeState {
            start_location: space.instant_to_axis_x(state.range.start)?,
            end_location: space.instant_to_axis_x(state.range.end)?,
            ..state
        });
        Ok(())
    }

    /// Moves the animation handles to new screen locations.
    ///
    /// Locations are converted back to instants (calendar-correct for month
    /// and year) and clamped to the limits. `is_dragging == false` ends the
    /// handle gesture. Returns the resulting range, or `None` when no range
    /// is set.
    pub fn drag_animation_range(
        &mut self,
        start_location: f64,
        end_location: f64,
        is_dragging: bool,
    ) -> AxisResult<Option<AnimationRange>> {
        let start_location = validate_pixel_delta("animation start location", start_location)?;
        let end_location = validate_pixel_delta("animation end location", end_location)?;
        let Some(state) = self.animation else {
            return Ok(None);
        };

        let space = self.coordinate_space();
        let delta_start = start_location - state.start_location;
        let delta_end = end_location - state.end_location;
        let mut start = state.range.start;
        let mut end = state.range.end;
        if delta_start != 0.0 {
            start = moved_handle_instant(start, state.start_location, delta_start, space)?;
        }
        if delta_end != 0.0 {
            end = moved_handle_instant(end, state.end_location, delta_end, space)?;
        }

        let (start, start_location) =
            clamp_handle(self.limits, start, start_location, state.start_location);
        let (end, end_location) = clamp_handle(self.limits, end, end_location, state.end_location);
        if start > end {
            warn!(start = %start, end = %end, "animation handles crossed");
        }

        let range = AnimationRange { start, end };
        self.animation = Some(AnimationRangeState {
            range,
            start_location,
            end_location,
        });
        self.interaction.on_animation_drag(is_dragging);

        if delta_start != 0.0 || delta_end != 0.0 {
            self.emit_event(AxisEvent::AnimationRangeChanged { start, end });
        }
        if !is_dragging {
            self.flush_deferred_dates()?;
        }
        Ok(Some(range))
    }
}
