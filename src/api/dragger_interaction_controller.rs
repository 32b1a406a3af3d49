use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::DraggerId;
use crate::error::AxisResult;
use crate::extensions::AxisEvent;

use super::AxisEngine;
use super::dragger_controller::{DragOutcome, drag_by};
use super::validation::validate_pixel_delta;

impl AxisEngine {
    pub fn dragger_drag_start(&mut self, id: DraggerId) {
        self.interaction.on_dragger_drag_start(id);
        trace!(dragger = ?id, "dragger drag started");
    }

    /// Records a raw pointer delta; applied on the next animation frame.
    pub fn queue_dragger_drag(&mut self, id: DraggerId, delta: f64) -> AxisResult<()> {
        let delta = validate_pixel_delta("dragger delta", delta)?;
        self.interaction.queue_dragger_delta(id, delta);
        Ok(())
    }

    /// Consumes the coalesced dragger delta and the latest hover sample.
    pub fn on_animation_frame(&mut self) -> AxisResult<()> {
        if let Some((id, delta)) = self.interaction.take_dragger_delta() {
            self.drag_dragger_by(id, delta)?;
        }
        if let Some(axis_x) = self.interaction.take_hover() {
            self.hover_at(axis_x)?;
        }
        Ok(())
    }

    /// Moves a dragger immediately and returns its instant afterwards.
    ///
    /// A candidate outside the timeline limits leaves the dragger untouched.
    pub fn drag_dragger_by(&mut self, id: DraggerId, delta: f64) -> AxisResult<DateTime<Utc>> {
        let delta = validate_pixel_delta("dragger delta", delta)?;
        let dragger = *self.draggers.get(id);
        match drag_by(dragger, delta, &self.dragger_frame())? {
            DragOutcome::Accepted(next) => {
                self.draggers.set(id, next);
                self.interaction.mark_moved();
                trace!(dragger = ?id, delta, time = %next.time, "dragger moved");
                self.emit_event(AxisEvent::DateChanged {
                    instant: next.time,
                    dragger: id,
                });
                Ok(next.time)
            }
            DragOutcome::Rejected => {
                debug!(dragger = ?id, delta, "dragger candidate outside timeline limits");
                Ok(dragger.time)
            }
            DragOutcome::Unchanged => Ok(dragger.time),
        }
    }

    /// Applies any pending frame delta, then reconciles dates deferred
    /// during the drag.
    pub fn dragger_drag_end(&mut self) -> AxisResult<()> {
        if let Some((id, delta)) = self.interaction.take_dragger_delta() {
            self.drag_dragger_by(id, delta)?;
        }
        self.interaction.on_dragger_drag_end();
        trace!("dragger drag ended");
        self.flush_deferred_dates()
    }
}
