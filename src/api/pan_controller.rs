use tracing::{debug, trace};

use crate::core::DraggerId;
use crate::error::AxisResult;
use crate::interaction::PanAction;

use super::AxisEngine;
use super::dragger_controller::reposition_after_pan;
use super::validation::validate_pixel_delta;

impl AxisEngine {
    pub fn pan_start(&mut self) {
        self.interaction.on_pan_start();
        trace!(position = self.geometry.position, "axis pan started");
    }

    /// Drags the axis by `delta` pixels (positive reveals the past).
    ///
    /// The delta is clamped to the pan bounds. Grid extension, including any
    /// top-up that keeps both axis edges covered, runs before the draggers
    /// re-evaluate their visibility.
    pub fn pan_by(&mut self, delta: f64) -> AxisResult<()> {
        let delta = validate_pixel_delta("pan delta", delta)?;
        let applied = self.geometry.clamp_position_delta(delta);
        if applied == 0.0 {
            return Ok(());
        }
        if applied != delta {
            debug!(requested = delta, applied, "pan clamped to axis bounds");
        }

        let plan = self.pan_policy.plan(self.sentinel, applied);
        self.geometry.position += applied;
        self.sentinel = plan.counter;
        if let PanAction::Extend { direction, cells } = plan.action {
            self.apply_extension(direction, cells);
        }
        self.cover_viewport();
        self.interaction.mark_moved();

        for id in DraggerId::BOTH {
            let participates = self.participates(id);
            let dragger =
                reposition_after_pan(*self.draggers.get(id), applied, participates, &self.range);
            self.draggers.set(id, dragger);
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.shift(applied);
        }

        trace!(
            applied,
            action = ?plan.action,
            counter = self.sentinel,
            position = self.geometry.position,
            "axis pan update"
        );
        Ok(())
    }

    /// Ends an axis drag: folds the drag offset into `transform_x` and puts
    /// `position` back at the midpoint, leaving every screen x unchanged.
    pub fn pan_end(&mut self) -> AxisResult<()> {
        let shift = self.geometry.position - self.geometry.midpoint;
        self.geometry.transform_x += shift;
        self.geometry.position = self.geometry.midpoint;
        self.geometry.left_bound -= shift;
        self.geometry.right_bound -= shift;
        self.interaction.on_pan_end();
        trace!(
            shift,
            moved = self.interaction.moved(),
            transform_x = self.geometry.transform_x,
            "axis pan ended"
        );
        self.flush_deferred_dates()
    }
}
