use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Immutable navigable bounds of the whole timeline (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineLimits {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimelineLimits {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AxisResult<Self> {
        Self { start, end }.validate()
    }

    pub(crate) fn validate(self) -> AxisResult<Self> {
        if self.start >= self.end {
            return Err(AxisError::InvalidLimits {
                start: self.start,
                end: self.end,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    #[must_use]
    pub fn clamp(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.clamp(self.start, self.end)
    }
}

/// Identifies one of the two axis markers.
///
/// `Primary` is the regular selected date; `Secondary` only participates in
/// compare mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraggerId {
    Primary,
    Secondary,
}

impl DraggerId {
    pub const BOTH: [DraggerId; 2] = [DraggerId::Primary, DraggerId::Secondary];

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}
