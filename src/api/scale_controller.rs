use tracing::debug;

use crate::core::{TimeScale, validate_axis_geometry};
use crate::error::AxisResult;
use crate::extensions::AxisEvent;

use super::AxisEngine;

impl AxisEngine {
    /// Highest wheel-zoom index: minute with sub-daily layers, day otherwise.
    #[must_use]
    pub fn max_scale_index(&self) -> u8 {
        if self.has_subdaily_layers {
            TimeScale::Minute.index()
        } else {
            TimeScale::Day.index()
        }
    }

    pub fn set_has_subdaily_layers(&mut self, has_subdaily_layers: bool) {
        self.has_subdaily_layers = has_subdaily_layers;
    }

    /// Switches scale and rebuilds the window.
    ///
    /// After a wheel zoom the hover instant stays under the pointer;
    /// otherwise the selected dragger's date is placed at the scale change
    /// anchor ratio.
    pub fn set_time_scale(&mut self, scale: TimeScale) -> AxisResult<()> {
        if scale == self.scale {
            self.interaction.set_wheel_zoom_pending(false);
            return Ok(());
        }
        validate_axis_geometry(self.geometry.axis_width, self.grid_widths.for_scale(scale))?;

        let hover = self.interaction.hover();
        let (anchor, ratio) = match hover.time {
            Some(time) if self.interaction.wheel_zoom_pending() => {
                (time, (hover.line_x / self.geometry.axis_width).clamp(0.0, 1.0))
            }
            _ => (
                self.draggers.get(self.selected).time,
                self.behavior.scale_change_anchor_ratio,
            ),
        };
        self.interaction.set_wheel_zoom_pending(false);

        let previous = self.scale;
        self.scale = scale;
        if let Err(err) = self.rebuild_window(anchor, ratio) {
            self.scale = previous;
            return Err(err);
        }
        debug!(from = ?previous, to = ?scale, anchor = %anchor, "time scale changed");
        Ok(())
    }

    /// Applies a new axis width, keeping the selected dragger at the same
    /// fraction of the axis.
    pub fn set_axis_width(&mut self, axis_width: f64) -> AxisResult<()> {
        validate_axis_geometry(axis_width, self.geometry.grid_width)?;
        let previous = self.geometry.axis_width;
        if axis_width == previous {
            return Ok(());
        }

        let dragger = *self.draggers.get(self.selected);
        let ratio = (dragger.pixel_position + self.behavior.dragger_width) / previous;
        let ratio = if dragger.visible && (0.0..=1.0).contains(&ratio) {
            ratio
        } else {
            self.behavior.initial_anchor_ratio
        };

        self.geometry.axis_width = axis_width;
        if let Err(err) = self.rebuild_window(dragger.time, ratio) {
            self.geometry.axis_width = previous;
            return Err(err);
        }
        debug!(from = previous, to = axis_width, ratio, "axis width changed");
        Ok(())
    }

    /// Wheel zoom. `delta_y > 0` zooms out.
    ///
    /// Emits `ScaleChangeRequested` and returns the requested scale; the host
    /// answers with [`AxisEngine::set_time_scale`].
    pub fn wheel(&mut self, delta_y: f64) -> Option<TimeScale> {
        let index = self.scale.index();
        let next_index = if delta_y > 0.0 {
            index.checked_sub(1).filter(|next| *next >= 1)
        } else {
            Some(index + 1).filter(|next| *next <= self.max_scale_index())
        }?;
        let next_scale = TimeScale::from_index(next_index)?;

        self.interaction.set_wheel_zoom_pending(true);
        self.emit_event(AxisEvent::ScaleChangeRequested {
            next_scale_index: next_index,
            next_scale,
        });
        Some(next_scale)
    }
}
