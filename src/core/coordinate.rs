use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::calendar::calendar_diff;
use super::time_scale::{DAY_MS, TimeScale};

/// Unsigned pixel distance of `instant` from the front cell.
///
/// Matches the grid placement of every instant at or after `front_cell`.
#[must_use]
pub fn instant_to_pixel(
    instant: DateTime<Utc>,
    front_cell: DateTime<Utc>,
    scale: TimeScale,
    grid_width: f64,
) -> f64 {
    calendar_diff(front_cell, instant, scale).abs() * grid_width
}

/// Linear interpolation between two neighbouring cell instants.
///
/// `pixel_offset / grid_width` is the fraction of the way from `front_cell`
/// to `next_cell`.
#[must_use]
pub fn pixel_to_instant(
    pixel_offset: f64,
    front_cell: DateTime<Utc>,
    next_cell: DateTime<Utc>,
    grid_width: f64,
) -> DateTime<Utc> {
    let span_ms = (next_cell - front_cell).num_milliseconds() as f64;
    offset_by_millis(front_cell, pixel_offset / grid_width * span_ms)
}

/// Converts a grid-relative pixel offset into an instant.
///
/// Fixed scales are linear. Month and year step whole units from the front
/// cell and spread the remainder over the calendar-correct day count of the
/// landing unit, leap years included.
#[must_use]
pub fn offset_to_instant(
    front_cell: DateTime<Utc>,
    pixel_offset: f64,
    scale: TimeScale,
    grid_width: f64,
) -> DateTime<Utc> {
    if let Some(unit) = scale.fixed_millis() {
        return offset_by_millis(front_cell, pixel_offset * (unit as f64 / grid_width));
    }

    let coefficient = pixel_offset / grid_width;
    let whole = coefficient.floor();
    let Some(landing) = scale.add_units(front_cell, whole as i64) else {
        return front_cell;
    };
    let days = scale.days_in_unit(landing).unwrap_or(0);
    let remainder_ms = f64::from(days) * DAY_MS as f64 * (coefficient - whole);
    offset_by_millis(landing, remainder_ms)
}

pub(crate) fn offset_by_millis(instant: DateTime<Utc>, millis: f64) -> DateTime<Utc> {
    if !millis.is_finite() {
        return instant;
    }
    TimeDelta::try_milliseconds(millis.round() as i64)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(instant)
}

/// Screen-space mapping of the virtualized axis.
///
/// The cell at index `i` is drawn at `i * grid_width + transform_x + position`,
/// where `front_cell` is the instant of index 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCoordinateSpace {
    pub scale: TimeScale,
    pub grid_width: f64,
    pub front_cell: DateTime<Utc>,
    pub transform_x: f64,
    pub position: f64,
}

impl AxisCoordinateSpace {
    fn validate(self) -> AxisResult<Self> {
        if !self.grid_width.is_finite() || self.grid_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "grid width must be finite and > 0".to_owned(),
            ));
        }
        if !self.transform_x.is_finite() || !self.position.is_finite() {
            return Err(AxisError::InvalidData(
                "axis transform and position must be finite".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Signed grid offset of `instant` relative to the front cell.
    ///
    /// Negative for instants before the window, which keeps off-window
    /// marker positions consistent once the window scrolls to them.
    #[must_use]
    pub fn grid_offset(self, instant: DateTime<Utc>) -> f64 {
        calendar_diff(self.front_cell, instant, self.scale) * self.grid_width
    }

    pub fn instant_to_axis_x(self, instant: DateTime<Utc>) -> AxisResult<f64> {
        let space = self.validate()?;
        Ok(space.grid_offset(instant) + space.transform_x + space.position)
    }

    pub fn axis_x_to_instant(self, axis_x: f64) -> AxisResult<DateTime<Utc>> {
        let space = self.validate()?;
        if !axis_x.is_finite() {
            return Err(AxisError::InvalidData(
                "axis x must be finite".to_owned(),
            ));
        }
        let offset = axis_x - space.transform_x - space.position;
        Ok(offset_to_instant(
            space.front_cell,
            offset,
            space.scale,
            space.grid_width,
        ))
    }

    /// Screen x of the cell at `index`.
    #[must_use]
    pub fn cell_x(self, index: usize) -> f64 {
        index as f64 * self.grid_width + self.transform_x + self.position
    }
}
