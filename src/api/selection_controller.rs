use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::DraggerId;
use crate::error::AxisResult;
use crate::extensions::AxisEvent;

use super::dragger_controller::{check_within_viewport, reposition_after_external_change};
use super::validation::clamp_date_to_limits;
use super::{AxisEngine, SelectedDates};

impl AxisEngine {
    /// Applies host-owned selected dates.
    ///
    /// While a gesture owns the draggers the dates are stored (latest wins)
    /// and reconciled once when the gesture ends.
    pub fn set_selected_dates(
        &mut self,
        primary: DateTime<Utc>,
        secondary: Option<DateTime<Utc>>,
    ) -> AxisResult<()> {
        let dates = SelectedDates {
            primary: clamp_date_to_limits(self.limits, primary, "primary_date"),
            secondary: secondary
                .map(|date| clamp_date_to_limits(self.limits, date, "secondary_date")),
        };
        if self.interaction.is_gesture_active() {
            debug!(
                mode = ?self.interaction.mode(),
                primary = %dates.primary,
                "deferring external dates until gesture ends"
            );
            self.deferred_external = Some(dates);
            return Ok(());
        }
        self.external = dates;
        self.reconcile_external_dates()
    }

    pub(super) fn flush_deferred_dates(&mut self) -> AxisResult<()> {
        if self.interaction.is_gesture_active() {
            return Ok(());
        }
        let Some(dates) = self.deferred_external.take() else {
            return Ok(());
        };
        self.external = dates;
        self.reconcile_external_dates()
    }

    /// Moves each dragger to its external date in place when the move stays
    /// on screen, otherwise rebuilds the window around the date.
    fn reconcile_external_dates(&mut self) -> AxisResult<()> {
        for id in DraggerId::BOTH {
            let target = self.external.date_for(id);
            let dragger = *self.draggers.get(id);
            if dragger.time == target {
                continue;
            }
            if !self.participates(id) {
                self.move_dragger_to(id, target)?;
                continue;
            }

            let check = check_within_viewport(target, dragger, &self.dragger_frame());
            if check.within_range {
                self.move_dragger_to(id, target)?;
            } else {
                let ratio = self
                    .behavior
                    .far_jump_anchor_ratio(check.unit_distance, check.is_past);
                debug!(
                    dragger = ?id,
                    target = %target,
                    unit_distance = check.unit_distance,
                    ratio,
                    "external date outside viewport, rebuilding window"
                );
                self.draggers.get_mut(id).time = target;
                self.rebuild_window(target, ratio)?;
            }
        }
        Ok(())
    }

    fn move_dragger_to(&mut self, id: DraggerId, instant: DateTime<Utc>) -> AxisResult<()> {
        let participates = self.participates(id);
        let moved = reposition_after_external_change(
            *self.draggers.get(id),
            instant,
            participates,
            &self.dragger_frame(),
        )?;
        self.draggers.set(id, moved);
        Ok(())
    }

    /// Toggles compare mode; the secondary dragger follows its date when on.
    pub fn set_compare_mode(&mut self, active: bool) -> AxisResult<()> {
        if self.compare_mode_active == active {
            return Ok(());
        }
        self.compare_mode_active = active;
        if active {
            for id in DraggerId::BOTH {
                self.move_dragger_to(id, self.external.date_for(id))?;
            }
        } else {
            self.draggers.get_mut(self.selected.other()).visible = false;
        }
        debug!(active, selected = ?self.selected, "compare mode changed");
        Ok(())
    }

    /// User picked a dragger lane. Returns `true` when a change request was
    /// emitted, which only happens for the inactive dragger.
    pub fn select_dragger(&mut self, id: DraggerId) -> bool {
        if id == self.selected {
            return false;
        }
        self.emit_event(AxisEvent::SelectedDraggerChangeRequested { dragger: id });
        true
    }

    /// Applies the host's selected dragger and re-centers the window when
    /// the newly selected date would be off screen.
    pub fn set_selected_dragger(&mut self, id: DraggerId) -> AxisResult<()> {
        if id == self.selected {
            return Ok(());
        }
        self.selected = id;
        for dragger_id in DraggerId::BOTH {
            let participates = self.participates(dragger_id);
            let in_window = self.range.contains_instant(self.draggers.get(dragger_id).time);
            let dragger = self.draggers.get_mut(dragger_id);
            dragger.selected = dragger_id == id;
            dragger.visible = participates && in_window;
        }

        let target = self.external.date_for(id);
        let check = check_within_viewport(target, *self.draggers.get(id), &self.dragger_frame());
        if !check.within_range {
            let ratio = self
                .behavior
                .far_jump_anchor_ratio(check.unit_distance, check.is_past);
            self.draggers.get_mut(id).time = target;
            self.rebuild_window(target, ratio)?;
        }
        debug!(selected = ?id, "selected dragger changed");
        Ok(())
    }
}
