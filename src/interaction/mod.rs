pub mod frame_register;
pub mod pan_extension;

use serde::{Deserialize, Serialize};

use crate::core::DraggerId;

pub use frame_register::{FrameDeltaRegister, FrameLatest};
pub use pan_extension::{PanAction, PanDirection, PanExtensionPolicy, PanPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    PanningAxis,
    DraggingDragger(DraggerId),
    DraggingAnimationRange,
}

/// Public hover-line state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub line_x: f64,
    pub time: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            line_x: 0.0,
            time: None,
        }
    }
}

/// Gesture bookkeeping shared by the axis engine controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    moved: bool,
    wheel_zoom_pending: bool,
    dragger_frame: FrameDeltaRegister,
    dragger_frame_target: Option<DraggerId>,
    hover_frame: FrameLatest<f64>,
    hover: HoverState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            moved: false,
            wheel_zoom_pending: false,
            dragger_frame: FrameDeltaRegister::default(),
            dragger_frame_target: None,
            hover_frame: FrameLatest::default(),
            hover: HoverState::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    /// Any gesture that owns the draggers suppresses external repositioning.
    #[must_use]
    pub fn is_gesture_active(self) -> bool {
        self.mode != InteractionMode::Idle
    }

    #[must_use]
    pub fn moved(self) -> bool {
        self.moved
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn wheel_zoom_pending(self) -> bool {
        self.wheel_zoom_pending
    }

    pub fn on_pan_start(&mut self) {
        self.mode = InteractionMode::PanningAxis;
        self.moved = false;
    }

    pub fn on_pan_end(&mut self) {
        if self.mode == InteractionMode::PanningAxis {
            self.mode = InteractionMode::Idle;
        }
    }

    pub fn on_dragger_drag_start(&mut self, id: DraggerId) {
        self.mode = InteractionMode::DraggingDragger(id);
        self.hover.visible = false;
        self.dragger_frame.reset();
        self.dragger_frame_target = Some(id);
    }

    pub fn on_dragger_drag_end(&mut self) {
        if matches!(self.mode, InteractionMode::DraggingDragger(_)) {
            self.mode = InteractionMode::Idle;
        }
        self.dragger_frame.reset();
        self.dragger_frame_target = None;
    }

    pub fn on_animation_drag(&mut self, is_dragging: bool) {
        self.mode = if is_dragging {
            InteractionMode::DraggingAnimationRange
        } else if self.mode == InteractionMode::DraggingAnimationRange {
            InteractionMode::Idle
        } else {
            self.mode
        };
        self.hover.visible = false;
        self.moved = true;
    }

    pub fn mark_moved(&mut self) {
        self.moved = true;
    }

    /// Consumes the "gesture moved" flag; an unmoved release is a click.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    pub fn set_wheel_zoom_pending(&mut self, pending: bool) {
        self.wheel_zoom_pending = pending;
    }

    pub fn queue_dragger_delta(&mut self, id: DraggerId, delta: f64) {
        if self.dragger_frame_target != Some(id) {
            self.dragger_frame.reset();
            self.dragger_frame_target = Some(id);
        }
        self.dragger_frame.offer_delta(delta);
    }

    pub fn take_dragger_delta(&mut self) -> Option<(DraggerId, f64)> {
        let id = self.dragger_frame_target?;
        self.dragger_frame.take().map(|delta| (id, delta))
    }

    pub fn queue_hover(&mut self, axis_x: f64) {
        self.hover_frame.offer(axis_x);
    }

    pub fn take_hover(&mut self) -> Option<f64> {
        self.hover_frame.take()
    }

    /// Hover line stays hidden while any gesture is in progress.
    #[must_use]
    pub fn allows_hover_line(self) -> bool {
        self.mode == InteractionMode::Idle
    }

    pub fn set_hover(&mut self, hover: HoverState) {
        self.hover = hover;
    }

    pub fn hide_hover_line(&mut self) {
        self.hover.visible = false;
    }

    /// Drops any sample still queued for the next frame as well.
    pub fn on_pointer_leave(&mut self) {
        self.hover_frame.clear();
        self.hover.visible = false;
    }
}
