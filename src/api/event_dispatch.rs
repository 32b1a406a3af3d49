use tracing::trace;

use crate::extensions::{AxisContext, AxisEvent};

use super::AxisEngine;

impl AxisEngine {
    pub(super) fn listener_context(&self) -> AxisContext {
        AxisContext {
            scale: self.scale,
            axis_width: self.geometry.axis_width,
            front_instant: self.range.front_instant(),
            back_instant: self.range.back_instant(),
            cells_len: self.range.len(),
            selected_dragger: self.selected,
            compare_mode_active: self.compare_mode_active,
            interaction_mode: self.interaction.mode(),
        }
    }

    /// Delivers `event` to every listener in registration order.
    pub(super) fn emit_event(&mut self, event: AxisEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        trace!(?event, listeners = self.listeners.len(), "emitting axis event");
        for listener in self.listeners.values_mut() {
            listener.on_event(event, context);
        }
    }
}
