use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::coordinate::AxisCoordinateSpace;
use super::time_grid::year_cell_span;
use super::time_scale::TimeScale;
use super::types::TimelineLimits;

/// Horizontal layout of the axis.
///
/// `position` is the draggable offset of the grid group, `transform_x` the
/// shift of the virtualized cell window inside that group. `left_bound` and
/// `right_bound` clamp `position` during a pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub grid_width: f64,
    pub axis_width: f64,
    pub transform_x: f64,
    pub position: f64,
    pub midpoint: f64,
    pub left_bound: f64,
    pub right_bound: f64,
    pub visible_tile_count: f64,
    pub grid_number: usize,
    pub window_cells: usize,
    /// Screen x the anchor instant is placed at on rebuild.
    pub left_offset: f64,
}

impl AxisGeometry {
    #[must_use]
    pub fn coordinate_space(&self, scale: TimeScale, front_cell: DateTime<Utc>) -> AxisCoordinateSpace {
        AxisCoordinateSpace {
            scale,
            grid_width: self.grid_width,
            front_cell,
            transform_x: self.transform_x,
            position: self.position,
        }
    }

    /// Clamps a requested position delta to the pan bounds.
    #[must_use]
    pub fn clamp_position_delta(&self, delta: f64) -> f64 {
        let target = (self.position + delta).clamp(self.left_bound, self.right_bound);
        target - self.position
    }
}

pub fn validate_axis_geometry(axis_width: f64, grid_width: f64) -> AxisResult<()> {
    if !axis_width.is_finite() || axis_width <= 0.0 || !grid_width.is_finite() || grid_width <= 0.0
    {
        return Err(AxisError::DegenerateGeometry {
            axis_width,
            grid_width,
        });
    }
    Ok(())
}

/// Cell counts and centring offset of a freshly built window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub visible_tile_count: f64,
    pub grid_number: usize,
    pub units_before: i64,
    pub units_after: i64,
    pub midpoint: f64,
}

/// Resolves how many cells to build around an anchor placed at `left_offset`.
///
/// The window holds `window_factor` times the visible tile count (every year
/// of the limits for year scale); the split before/after the anchor follows
/// how far `left_offset` sits from the axis centre.
pub fn resolve_window_layout(
    scale: TimeScale,
    limits: TimelineLimits,
    axis_width: f64,
    grid_width: f64,
    left_offset: f64,
    window_factor: f64,
) -> AxisResult<WindowLayout> {
    validate_axis_geometry(axis_width, grid_width)?;
    if !window_factor.is_finite() || window_factor < 1.0 {
        return Err(AxisError::InvalidData(
            "window factor must be finite and >= 1".to_owned(),
        ));
    }

    // Rounded to dodge float noise such as 1199.9999999 / 12.
    let mut visible = ((axis_width / grid_width) * 1e8).round() / 1e8;
    let mut grid_number = (visible * window_factor).floor() as usize;
    if scale.is_materialized() {
        grid_number = year_cell_span(limits).count().max(1);
        visible = grid_number as f64;
    }

    let half = (grid_number / 2) as i64;
    let offset_grids = (left_offset / grid_width).floor() as i64 - (visible / 2.0).floor() as i64;
    let midpoint = -(grid_width * grid_number as f64) / 2.0 + (visible / 2.0) * grid_width;

    Ok(WindowLayout {
        visible_tile_count: visible,
        grid_number,
        units_before: half + offset_grids,
        units_after: half - offset_grids,
        midpoint,
    })
}
