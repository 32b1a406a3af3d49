use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Side of the timeline a pan reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    /// Dragging right (`delta > 0`): earlier dates come into view.
    Past,
    /// Dragging left (`delta < 0`): later dates come into view.
    Future,
}

impl PanDirection {
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Past)
        } else if delta < 0.0 {
            Some(Self::Future)
        } else {
            None
        }
    }
}

/// Outcome of one pan update, before the engine applies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PanAction {
    /// Zero delta.
    Idle,
    /// Position moves, counter accumulates (or stays put on year scale).
    Shift,
    /// Direction reversed: counter re-based against the opposite threshold.
    Rebase,
    /// Window must grow by `cells` toward `direction`.
    Extend { direction: PanDirection, cells: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanPlan {
    pub action: PanAction,
    /// Sentinel counter after the update.
    pub counter: f64,
}

/// Sentinel-counter policy deciding when a drag extends the grid window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanExtensionPolicy {
    pub grid_width: f64,
    pub batch_cells: usize,
    pub threshold_px: f64,
    /// Year scale: the whole range is built, pans never extend.
    pub materialized: bool,
}

impl PanExtensionPolicy {
    pub fn new(
        grid_width: f64,
        visible_tile_count: f64,
        extension_ratio: f64,
        materialized: bool,
    ) -> AxisResult<Self> {
        if !grid_width.is_finite() || grid_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "pan grid width must be finite and > 0".to_owned(),
            ));
        }
        if !visible_tile_count.is_finite() || visible_tile_count < 0.0 {
            return Err(AxisError::InvalidData(
                "visible tile count must be finite and >= 0".to_owned(),
            ));
        }
        if !extension_ratio.is_finite() || extension_ratio <= 0.0 || extension_ratio > 1.0 {
            return Err(AxisError::InvalidData(
                "extension ratio must be finite and in (0, 1]".to_owned(),
            ));
        }

        let batch_cells = (visible_tile_count * extension_ratio).floor() as usize + 1;
        Ok(Self {
            grid_width,
            batch_cells,
            threshold_px: grid_width * batch_cells as f64,
            materialized,
        })
    }

    /// Plans one pan step of `delta` pixels from sentinel value `counter`.
    ///
    /// | scale        | delta / counter              | action                          |
    /// |--------------|------------------------------|---------------------------------|
    /// | any          | `delta == 0`                 | `Idle`                          |
    /// | materialized | any                          | `Shift`, counter unchanged      |
    /// | virtualized  | same sign, `|c + d| <= T`    | `Shift`, accumulate             |
    /// | virtualized  | opposite sign, re-based fits | `Rebase`, `c + d - sign(c) * T` |
    /// | virtualized  | result beyond `T`            | `Extend`, keep the remainder    |
    #[must_use]
    pub fn plan(self, counter: f64, delta: f64) -> PanPlan {
        if delta == 0.0 || !delta.is_finite() {
            return PanPlan {
                action: PanAction::Idle,
                counter,
            };
        }
        if self.materialized {
            return PanPlan {
                action: PanAction::Shift,
                counter,
            };
        }

        let threshold = self.threshold_px;
        let reversal = counter != 0.0 && counter.signum() != delta.signum();
        let mut next = counter + delta;
        if reversal {
            next -= counter.signum() * threshold;
        }

        if next.abs() <= threshold {
            let action = if reversal {
                PanAction::Rebase
            } else {
                PanAction::Shift
            };
            return PanPlan {
                action,
                counter: next,
            };
        }

        // A single event may cross the threshold more than once.
        let over_drag = (next.abs() - 2.0 * threshold).max(0.0);
        let over_drag_cells = (over_drag / self.grid_width).ceil() as usize;
        let cells = self.batch_cells + over_drag_cells;
        let remainder = next - next.signum() * cells as f64 * self.grid_width;
        let direction = if next > 0.0 {
            PanDirection::Past
        } else {
            PanDirection::Future
        };

        PanPlan {
            action: PanAction::Extend { direction, cells },
            counter: remainder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PanAction, PanDirection, PanExtensionPolicy};

    fn policy() -> PanExtensionPolicy {
        // 100 visible tiles of 12px: batch 26 cells, threshold 312px.
        PanExtensionPolicy::new(12.0, 100.0, 0.25, false).expect("policy")
    }

    #[test]
    fn threshold_is_batch_of_grid_widths() {
        let policy = policy();
        assert_eq!(policy.batch_cells, 26);
        assert!((policy.threshold_px - 312.0).abs() <= 1e-12);
    }

    #[test]
    fn within_threshold_accumulates() {
        let plan = policy().plan(100.0, 50.0);
        assert_eq!(plan.action, PanAction::Shift);
        assert!((plan.counter - 150.0).abs() <= 1e-12);
    }

    #[test]
    fn crossing_threshold_extends_toward_past() {
        let plan = policy().plan(300.0, 20.0);
        assert_eq!(
            plan.action,
            PanAction::Extend {
                direction: PanDirection::Past,
                cells: 26
            }
        );
        assert!((plan.counter - 8.0).abs() <= 1e-12);
    }

    #[test]
    fn over_drag_adds_cells_and_keeps_counter_bounded() {
        let policy = policy();
        let plan = policy.plan(0.0, -1000.0);
        let PanAction::Extend { direction, cells } = plan.action else {
            panic!("expected extension, got {:?}", plan.action);
        };
        assert_eq!(direction, PanDirection::Future);
        // 1000 - 624 = 376px over, 32 extra cells.
        assert_eq!(cells, 26 + 32);
        assert!(plan.counter.abs() <= policy.threshold_px);
        assert!(plan.counter < 0.0);
    }

    #[test]
    fn reversal_rebases_against_opposite_threshold() {
        let plan = policy().plan(80.0, -10.0);
        assert_eq!(plan.action, PanAction::Rebase);
        assert!((plan.counter + 242.0).abs() <= 1e-12);
    }

    #[test]
    fn materialized_scale_never_extends() {
        let policy = PanExtensionPolicy::new(12.0, 21.0, 0.25, true).expect("policy");
        let plan = policy.plan(5.0, 10_000.0);
        assert_eq!(plan.action, PanAction::Shift);
        assert!((plan.counter - 5.0).abs() <= 1e-12);
    }

    #[test]
    fn zero_delta_is_idle() {
        let plan = policy().plan(42.0, 0.0);
        assert_eq!(plan.action, PanAction::Idle);
        assert!((plan.counter - 42.0).abs() <= 1e-12);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        let err = PanExtensionPolicy::new(12.0, 100.0, 0.0, false).expect_err("ratio must fail");
        assert!(format!("{err}").contains("extension ratio"));
    }
}
