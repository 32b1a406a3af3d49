use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::pixel_to_instant;
use crate::error::AxisResult;
use crate::extensions::AxisEvent;
use crate::interaction::{HoverState, InteractionMode};

use super::AxisEngine;
use super::validation::validate_pixel_delta;

impl AxisEngine {
    /// Records the pointer position; resolved on the next animation frame.
    pub fn pointer_move(&mut self, axis_x: f64) -> AxisResult<()> {
        let axis_x = validate_pixel_delta("pointer x", axis_x)?;
        self.interaction.queue_hover(axis_x);
        Ok(())
    }

    /// Resolves the hovered cell and hover instant at screen `axis_x`.
    ///
    /// Positions outside the window or outside the timeline limits leave the
    /// hover state untouched and return `None`.
    pub fn hover_at(&mut self, axis_x: f64) -> AxisResult<Option<DateTime<Utc>>> {
        let axis_x = validate_pixel_delta("pointer x", axis_x)?;
        if !self.interaction.allows_hover_line() {
            self.interaction.hide_hover_line();
            return Ok(None);
        }

        let space = self.coordinate_space();
        let grid_width = space.grid_width;
        let cell_offset = ((axis_x - space.transform_x - space.position) / grid_width).floor();
        if cell_offset < 0.0 {
            return Ok(None);
        }
        let index = cell_offset as usize;
        let Some(cell) = self.range.get(index) else {
            return Ok(None);
        };
        let next = match self.range.get(index + 1) {
            Some(next) => next.raw_instant,
            None => match self.scale.add_units(cell.raw_instant, 1) {
                Some(next) => next,
                None => return Ok(None),
            },
        };

        let x_in_cell = axis_x - space.cell_x(index);
        let time = pixel_to_instant(x_in_cell, cell.raw_instant, next, grid_width);
        if !self.limits.contains(time) {
            return Ok(None);
        }

        self.interaction.set_hover(HoverState {
            visible: true,
            line_x: index as f64 * grid_width + x_in_cell + space.transform_x + space.position,
            time: Some(time),
        });
        trace!(axis_x, time = %time, "hover updated");
        Ok(Some(time))
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Moves the selected dragger to the hover instant.
    ///
    /// Ignored when the preceding gesture moved the axis or while the
    /// animation range is being dragged.
    pub fn click_axis(&mut self) -> AxisResult<Option<DateTime<Utc>>> {
        if self.interaction.mode() == InteractionMode::DraggingAnimationRange {
            return Ok(None);
        }
        if self.interaction.take_moved() {
            return Ok(None);
        }
        let hover = self.interaction.hover();
        let Some(time) = hover.time else {
            return Ok(None);
        };

        let id = self.selected;
        let other = id.other();
        let other_visible = self.compare_mode_active
            && self.range.contains_instant(self.draggers.get(other).time);
        let dragger = self.draggers.get_mut(id);
        dragger.time = time;
        dragger.pixel_position = hover.line_x - self.behavior.dragger_width;
        dragger.visible = true;
        self.draggers.get_mut(other).visible = other_visible;

        self.emit_event(AxisEvent::DateChanged {
            instant: time,
            dragger: id,
        });
        Ok(Some(time))
    }
}
