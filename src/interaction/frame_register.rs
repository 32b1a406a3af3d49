use serde::{Deserialize, Serialize};

/// Coalesces raw pointer deltas into one update per animation frame.
///
/// The register keeps the cumulative offset of the gesture, so taking it
/// once per frame yields the whole distance moved since the previous frame
/// no matter how many raw events arrived in between.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameDeltaRegister {
    cumulative: f64,
    consumed: f64,
    pending: bool,
}

impl FrameDeltaRegister {
    pub fn offer_delta(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.cumulative += delta;
        self.pending = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the delta accumulated since the last take.
    pub fn take(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        let delta = self.cumulative - self.consumed;
        self.consumed = self.cumulative;
        Some(delta)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Latest-value register: offers replace each other, a take drains it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameLatest<T> {
    pending: Option<T>,
}

impl<T: Copy> FrameLatest<T> {
    pub fn offer(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
