//! Pure dragger reconciliation helpers.
//!
//! Every function takes a read-only [`DraggerFrame`] and returns the proposed
//! dragger; only the engine writes the result back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::coordinate::offset_by_millis;
use crate::core::{AxisCoordinateSpace, TimelineLimits, VisibleRange, calendar_diff};
use crate::error::AxisResult;

use super::Dragger;

/// Read-only view of the axis used by dragger updates.
#[derive(Debug, Clone, Copy)]
pub struct DraggerFrame<'a> {
    pub range: &'a VisibleRange,
    pub space: AxisCoordinateSpace,
    pub limits: TimelineLimits,
    pub axis_width: f64,
    pub dragger_width: f64,
    pub viewport_left_margin: f64,
    pub viewport_right_margin: f64,
}

impl DraggerFrame<'_> {
    /// Dragger left edge for `time`, signed relative to the current front cell.
    pub fn pixel_position_of(&self, time: DateTime<Utc>) -> AxisResult<f64> {
        Ok(self.space.instant_to_axis_x(time)? - self.dragger_width)
    }

    /// `participates` is false for the secondary dragger outside compare mode.
    #[must_use]
    pub fn is_visible(&self, time: DateTime<Utc>, participates: bool) -> bool {
        participates && self.range.contains_instant(time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragOutcome {
    Accepted(Dragger),
    /// Candidate fell outside the timeline limits.
    Rejected,
    Unchanged,
}

/// Where an externally supplied date would put a dragger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportCheck {
    pub within_range: bool,
    pub is_past: bool,
    /// Absolute distance from the dragger's current time, in scale units.
    pub unit_distance: f64,
}

pub fn reposition_after_external_change(
    dragger: Dragger,
    instant: DateTime<Utc>,
    participates: bool,
    frame: &DraggerFrame<'_>,
) -> AxisResult<Dragger> {
    Ok(Dragger {
        time: instant,
        pixel_position: frame.pixel_position_of(instant)?,
        visible: frame.is_visible(instant, participates),
        ..dragger
    })
}

/// Shifts the dragger with the axis; visibility follows the current window.
#[must_use]
pub fn reposition_after_pan(
    dragger: Dragger,
    delta: f64,
    participates: bool,
    range: &VisibleRange,
) -> Dragger {
    Dragger {
        pixel_position: dragger.pixel_position + delta,
        visible: participates && range.contains_instant(dragger.time),
        ..dragger
    }
}

/// Moves the dragger by `delta` pixels and derives its new instant.
///
/// Fixed-duration scales move the time linearly. Month and year re-derive
/// the instant from the new screen position so the landing unit's real
/// length (leap years included) is honoured.
pub fn drag_by(dragger: Dragger, delta: f64, frame: &DraggerFrame<'_>) -> AxisResult<DragOutcome> {
    if delta == 0.0 || !delta.is_finite() {
        return Ok(DragOutcome::Unchanged);
    }

    let pixel_position = dragger.pixel_position + delta;
    let space = frame.space;
    let candidate = match space.scale.fixed_millis() {
        Some(unit) => offset_by_millis(dragger.time, delta * unit as f64 / space.grid_width),
        None => space.axis_x_to_instant(pixel_position + frame.dragger_width)?,
    };
    if !frame.limits.contains(candidate) {
        return Ok(DragOutcome::Rejected);
    }

    Ok(DragOutcome::Accepted(Dragger {
        time: candidate,
        pixel_position,
        visible: frame.range.contains_instant(candidate),
        ..dragger
    }))
}

#[must_use]
pub fn check_within_viewport(
    candidate: DateTime<Utc>,
    dragger: Dragger,
    frame: &DraggerFrame<'_>,
) -> ViewportCheck {
    let diff = calendar_diff(dragger.time, candidate, frame.space.scale);
    let next_position = dragger.pixel_position + diff * frame.space.grid_width;
    ViewportCheck {
        within_range: next_position >= -frame.viewport_left_margin
            && next_position <= frame.axis_width - frame.viewport_right_margin,
        is_past: candidate < dragger.time,
        unit_distance: diff.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::{DragOutcome, DraggerFrame, check_within_viewport, drag_by};
    use crate::api::Dragger;
    use crate::core::{AxisCoordinateSpace, TimeScale, TimelineLimits, build_range};
    use chrono::{TimeZone, Utc};

    fn limits() -> TimelineLimits {
        TimelineLimits::new(
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        )
        .expect("limits")
    }

    #[test]
    fn day_drag_moves_time_linearly_and_checks_limits() {
        let anchor = Utc.with_ymd_and_hms(2010, 6, 15, 0, 0, 0).unwrap();
        let range = build_range(anchor, 5, 5, TimeScale::Day, limits());
        let frame = DraggerFrame {
            range: &range,
            space: AxisCoordinateSpace {
                scale: TimeScale::Day,
                grid_width: 12.0,
                front_cell: range.front_instant().expect("front"),
                transform_x: 0.0,
                position: 0.0,
            },
            limits: limits(),
            axis_width: 600.0,
            dragger_width: 49.0,
            viewport_left_margin: 26.0,
            viewport_right_margin: 80.0,
        };
        let dragger = Dragger {
            time: anchor,
            pixel_position: frame.pixel_position_of(anchor).expect("pixel"),
            visible: true,
            selected: true,
        };

        let DragOutcome::Accepted(moved) = drag_by(dragger, 24.0, &frame).expect("drag") else {
            panic!("drag within limits must be accepted");
        };
        assert_eq!(moved.time, Utc.with_ymd_and_hms(2010, 6, 17, 0, 0, 0).unwrap());
        assert!((moved.pixel_position - dragger.pixel_position - 24.0).abs() <= 1e-9);

        let far = drag_by(dragger, -12.0 * 10_000.0, &frame).expect("drag");
        assert_eq!(far, DragOutcome::Rejected);
        assert_eq!(drag_by(dragger, 0.0, &frame).expect("drag"), DragOutcome::Unchanged);
    }

    #[test]
    fn viewport_check_reports_direction_and_distance() {
        let anchor = Utc.with_ymd_and_hms(2010, 6, 15, 0, 0, 0).unwrap();
        let range = build_range(anchor, 5, 5, TimeScale::Day, limits());
        let frame = DraggerFrame {
            range: &range,
            space: AxisCoordinateSpace {
                scale: TimeScale::Day,
                grid_width: 12.0,
                front_cell: range.front_instant().expect("front"),
                transform_x: 0.0,
                position: 0.0,
            },
            limits: limits(),
            axis_width: 600.0,
            dragger_width: 49.0,
            viewport_left_margin: 26.0,
            viewport_right_margin: 80.0,
        };
        let dragger = Dragger {
            time: anchor,
            pixel_position: 200.0,
            visible: true,
            selected: true,
        };
        let near = check_within_viewport(
            Utc.with_ymd_and_hms(2010, 6, 12, 0, 0, 0).unwrap(),
            dragger,
            &frame,
        );
        assert!(near.within_range);
        assert!(near.is_past);
        assert!((near.unit_distance - 3.0).abs() <= 1e-9);

        let far = check_within_viewport(
            Utc.with_ymd_and_hms(2010, 8, 1, 0, 0, 0).unwrap(),
            dragger,
            &frame,
        );
        assert!(!far.within_range);
        assert!(!far.is_past);
    }
}
