use chrono::{DateTime, Utc};
use tracing::warn;

use crate::core::TimelineLimits;
use crate::error::{AxisError, AxisResult};

pub(super) fn validate_pixel_delta(name: &str, delta: f64) -> AxisResult<f64> {
    if !delta.is_finite() {
        return Err(AxisError::InvalidData(format!("{name} must be finite")));
    }
    Ok(delta)
}

/// Out-of-range external dates are recovered by clamping, never rejected.
pub(super) fn clamp_date_to_limits(
    limits: TimelineLimits,
    date: DateTime<Utc>,
    field: &str,
) -> DateTime<Utc> {
    let clamped = limits.clamp(date);
    if clamped != date {
        warn!(
            field,
            requested = %date,
            clamped = %clamped,
            "date outside timeline limits, clamping"
        );
    }
    clamped
}
