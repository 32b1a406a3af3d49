use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::{AxisGeometry, DraggerId, build_range, calendar_diff, resolve_window_layout};
use crate::error::{AxisError, AxisResult};
use crate::extensions::AxisEvent;
use crate::interaction::{PanDirection, PanExtensionPolicy};

use super::AxisEngine;
use super::dragger_controller::{DraggerFrame, reposition_after_external_change};

impl AxisEngine {
    pub(super) fn dragger_frame(&self) -> DraggerFrame<'_> {
        DraggerFrame {
            range: &self.range,
            space: self.coordinate_space(),
            limits: self.limits,
            axis_width: self.geometry.axis_width,
            dragger_width: self.behavior.dragger_width,
            viewport_left_margin: self.behavior.viewport_left_margin,
            viewport_right_margin: self.behavior.viewport_right_margin,
        }
    }

    /// Rebuilds the whole window so `anchor` sits at `anchor_ratio` of the
    /// axis width.
    ///
    /// Nothing is written unless the new window could be built.
    pub(super) fn rebuild_window(
        &mut self,
        anchor: DateTime<Utc>,
        anchor_ratio: f64,
    ) -> AxisResult<()> {
        let scale = self.scale;
        let grid_width = self.grid_widths.for_scale(scale);
        let axis_width = self.geometry.axis_width;
        let anchor = self.limits.clamp(anchor);
        let left_offset = axis_width * anchor_ratio;

        let layout = resolve_window_layout(
            scale,
            self.limits,
            axis_width,
            grid_width,
            left_offset,
            self.behavior.window_factor,
        )?;
        let range = build_range(
            anchor,
            layout.units_before,
            layout.units_after,
            scale,
            self.limits,
        );
        let Some(front) = range.front_instant() else {
            return Err(AxisError::InvalidData(format!(
                "no `{scale:?}` grid cell falls inside the timeline limits"
            )));
        };
        let pan_policy = PanExtensionPolicy::new(
            grid_width,
            layout.visible_tile_count,
            self.behavior.extension_ratio,
            scale.is_materialized(),
        )?;

        let anchor_offset = calendar_diff(front, anchor, scale) * grid_width;
        self.geometry = AxisGeometry {
            grid_width,
            axis_width,
            transform_x: left_offset - layout.midpoint - anchor_offset,
            position: layout.midpoint,
            midpoint: layout.midpoint,
            left_bound: layout.midpoint,
            right_bound: layout.midpoint,
            visible_tile_count: layout.visible_tile_count,
            grid_number: layout.grid_number,
            window_cells: 2 * (layout.grid_number / 2) + 1,
            left_offset,
        };
        self.range = range;
        self.pan_policy = pan_policy;
        self.sentinel = 0.0;
        self.refresh_pan_bounds()?;
        self.relocate_draggers()?;
        self.relocate_animation_range()?;

        debug!(
            scale = ?scale,
            anchor = %anchor,
            anchor_ratio,
            cells = self.range.len(),
            front = %front,
            transform_x = self.geometry.transform_x,
            "rebuilt grid window"
        );
        self.emit_event(AxisEvent::WindowRebuilt {
            cells_len: self.range.len(),
        });
        Ok(())
    }

    /// Pan bounds keep each timeline limit from crossing the axis centre.
    pub(super) fn refresh_pan_bounds(&mut self) -> AxisResult<()> {
        let space = self.coordinate_space();
        let half = self.geometry.axis_width / 2.0;
        let start_x = space.instant_to_axis_x(self.limits.start)?;
        let end_x = space.instant_to_axis_x(self.limits.end)?;
        self.geometry.right_bound = self.geometry.position + (half - start_x).max(0.0);
        self.geometry.left_bound = self.geometry.position - (end_x - half).max(0.0);
        Ok(())
    }

    pub(super) fn relocate_draggers(&mut self) -> AxisResult<()> {
        for id in DraggerId::BOTH {
            let participates = self.participates(id);
            let dragger = *self.draggers.get(id);
            let relocated = reposition_after_external_change(
                dragger,
                dragger.time,
                participates,
                &self.dragger_frame(),
            )?;
            self.draggers.set(id, relocated);
        }
        Ok(())
    }

    /// Tops the window up when a pan leaves an axis edge without cells.
    ///
    /// Runs after the counter-driven extension. A window clipped at a
    /// timeline limit keeps its uncovered edge.
    pub(super) fn cover_viewport(&mut self) {
        if self.scale.is_materialized() || self.range.is_empty() {
            return;
        }
        let grid_width = self.geometry.grid_width;

        let front_x = self.coordinate_space().cell_x(0);
        if front_x > 0.0 {
            let cells = (front_x / grid_width).ceil() as usize;
            trace!(front_x, cells, "past edge of axis uncovered");
            self.apply_extension(PanDirection::Past, cells);
        }

        let back_edge = self.coordinate_space().cell_x(self.range.len());
        let axis_width = self.geometry.axis_width;
        if back_edge < axis_width {
            let cells = ((axis_width - back_edge) / grid_width).ceil() as usize;
            trace!(back_edge, cells, "future edge of axis uncovered");
            self.apply_extension(PanDirection::Future, cells);
        }
    }

    /// Grows the window by `cells` toward `direction` and trims the far end
    /// back to the target length.
    ///
    /// `transform_x` absorbs the index shift, so every cell that survives
    /// keeps its screen x.
    pub(super) fn apply_extension(&mut self, direction: PanDirection, cells: usize) {
        let (Some(front), Some(back)) = (self.range.front_instant(), self.range.back_instant())
        else {
            return;
        };
        let cells = i64::try_from(cells).unwrap_or(i64::MAX);
        let grid_width = self.geometry.grid_width;
        let target = self.geometry.window_cells;

        let (added, removed) = match direction {
            PanDirection::Past => {
                let fresh = build_range(front, cells, -1, self.scale, self.limits);
                let added = fresh.len();
                self.range.prepend(fresh);
                self.geometry.transform_x -= added as f64 * grid_width;
                let removed = self.range.len().saturating_sub(target);
                self.range.trim_back(removed);
                (added, removed)
            }
            PanDirection::Future => {
                let fresh = build_range(back, -1, cells, self.scale, self.limits);
                let added = fresh.len();
                self.range.append(fresh);
                let removed = self.range.len().saturating_sub(target);
                self.range.trim_front(removed);
                self.geometry.transform_x += removed as f64 * grid_width;
                (added, removed)
            }
        };

        if added == 0 && removed == 0 {
            trace!(direction = ?direction, "grid window already at timeline limit");
            return;
        }
        debug!(
            direction = ?direction,
            requested = cells,
            added,
            removed,
            cells = self.range.len(),
            transform_x = self.geometry.transform_x,
            "extended grid window"
        );
        self.emit_event(AxisEvent::WindowExtended { added, removed });
    }
}
