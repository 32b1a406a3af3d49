use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::{
    AxisCoordinateSpace, AxisGeometry, DraggerId, TimeScale, TimeScaleGridWidths,
    TimelineLimits, VisibleRange,
};
use crate::error::AxisResult;
use crate::interaction::{HoverState, InteractionMode};

use super::{AxisBehavior, AxisEngine, Dragger, DraggerPair, SelectedDates};

impl AxisEngine {
    #[must_use]
    pub fn limits(&self) -> TimelineLimits {
        self.limits
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.scale
    }

    #[must_use]
    pub fn behavior(&self) -> AxisBehavior {
        self.behavior
    }

    #[must_use]
    pub fn grid_widths(&self) -> TimeScaleGridWidths {
        self.grid_widths
    }

    #[must_use]
    pub fn grid_width(&self) -> f64 {
        self.geometry.grid_width
    }

    #[must_use]
    pub fn axis_width(&self) -> f64 {
        self.geometry.axis_width
    }

    #[must_use]
    pub fn geometry(&self) -> AxisGeometry {
        self.geometry
    }

    #[must_use]
    pub fn visible_range(&self) -> &VisibleRange {
        &self.range
    }

    /// Screen mapping of the current window.
    #[must_use]
    pub fn axis_coordinate_space(&self) -> AxisCoordinateSpace {
        self.coordinate_space()
    }

    /// Screen x of every materialized cell, in window order.
    #[must_use]
    pub fn cell_positions(&self) -> Vec<f64> {
        let space = self.coordinate_space();
        (0..self.range.len()).map(|index| space.cell_x(index)).collect()
    }

    pub fn instant_to_axis_x(&self, instant: DateTime<Utc>) -> AxisResult<f64> {
        self.coordinate_space().instant_to_axis_x(instant)
    }

    /// Instant under screen `axis_x`; not clipped to the limits.
    pub fn instant_at_axis_x(&self, axis_x: f64) -> AxisResult<DateTime<Utc>> {
        self.coordinate_space().axis_x_to_instant(axis_x)
    }

    #[must_use]
    pub fn dragger(&self, id: DraggerId) -> Dragger {
        *self.draggers.get(id)
    }

    #[must_use]
    pub fn draggers(&self) -> DraggerPair {
        self.draggers
    }

    #[must_use]
    pub fn visible_draggers(&self) -> SmallVec<[DraggerId; 2]> {
        DraggerId::BOTH
            .into_iter()
            .filter(|id| self.draggers.get(*id).visible)
            .collect()
    }

    #[must_use]
    pub fn selected_dragger(&self) -> DraggerId {
        self.selected
    }

    #[must_use]
    pub fn compare_mode_active(&self) -> bool {
        self.compare_mode_active
    }

    #[must_use]
    pub fn selected_dates(&self) -> SelectedDates {
        self.external
    }

    #[must_use]
    pub fn has_deferred_dates(&self) -> bool {
        self.deferred_external.is_some()
    }

    #[must_use]
    pub fn has_subdaily_layers(&self) -> bool {
        self.has_subdaily_layers
    }

    #[must_use]
    pub fn sentinel_counter(&self) -> f64 {
        self.sentinel
    }

    #[must_use]
    pub fn extension_threshold(&self) -> f64 {
        self.pan_policy.threshold_px
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.interaction.hover()
    }
}
