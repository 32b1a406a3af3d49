use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::calendar::{days_in_month, days_in_year};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 86_400_000;

/// Granularity of one grid cell on the timeline axis.
///
/// Ordering follows the wheel-zoom index: `Year` is the coarsest (index 1)
/// and `Minute` the finest (index 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl TimeScale {
    pub const ALL: [TimeScale; 5] = [
        TimeScale::Year,
        TimeScale::Month,
        TimeScale::Day,
        TimeScale::Hour,
        TimeScale::Minute,
    ];

    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Year => 1,
            Self::Month => 2,
            Self::Day => 3,
            Self::Hour => 4,
            Self::Minute => 5,
        }
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Year),
            2 => Some(Self::Month),
            3 => Some(Self::Day),
            4 => Some(Self::Hour),
            5 => Some(Self::Minute),
            _ => None,
        }
    }

    /// Unit length in milliseconds for fixed-duration scales.
    ///
    /// Month and year return `None`: their length depends on the instance.
    #[must_use]
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            Self::Minute => Some(MINUTE_MS),
            Self::Hour => Some(HOUR_MS),
            Self::Day => Some(DAY_MS),
            Self::Month | Self::Year => None,
        }
    }

    /// Year cells are never virtualized: the whole limit range is materialized.
    #[must_use]
    pub fn is_materialized(self) -> bool {
        self == Self::Year
    }

    /// Truncates `instant` to the start of its unit.
    #[must_use]
    pub fn start_of(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let date = instant.date_naive();
        let naive = match self {
            Self::Year => date.with_ordinal(1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            Self::Month => date.with_day(1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            Self::Day => date.and_hms_opt(0, 0, 0),
            Self::Hour => date.and_hms_opt(instant.hour(), 0, 0),
            Self::Minute => date.and_hms_opt(instant.hour(), instant.minute(), 0),
        };
        naive.map_or(instant, |n| n.and_utc())
    }

    /// Calendar addition of `units` (possibly negative).
    ///
    /// Month arithmetic clamps the day to the end of the target month, so
    /// adding one month to Jan 31 lands on Feb 28/29.
    #[must_use]
    pub fn add_units(self, instant: DateTime<Utc>, units: i64) -> Option<DateTime<Utc>> {
        match self {
            Self::Minute | Self::Hour | Self::Day => {
                let unit = self.fixed_millis()?;
                let delta = TimeDelta::try_milliseconds(units.checked_mul(unit)?)?;
                instant.checked_add_signed(delta)
            }
            Self::Month => shift_months(instant, units),
            Self::Year => shift_months(instant, units.checked_mul(12)?),
        }
    }

    /// Number of days in the calendar unit containing `instant`.
    ///
    /// Only meaningful for month and year; fixed scales return `None`.
    #[must_use]
    pub fn days_in_unit(self, instant: DateTime<Utc>) -> Option<u32> {
        match self {
            Self::Month => Some(days_in_month(instant.year(), instant.month())),
            Self::Year => Some(days_in_year(instant.year())),
            Self::Minute | Self::Hour | Self::Day => None,
        }
    }

    /// Grid label for a cell starting at `instant`.
    #[must_use]
    pub fn format_label(self, instant: DateTime<Utc>) -> String {
        match self {
            Self::Minute | Self::Hour => instant.format("%H:%M").to_string(),
            Self::Day => instant.format("%d").to_string(),
            Self::Month => instant.format("%b").to_string().to_uppercase(),
            Self::Year => instant.format("%Y").to_string(),
        }
    }
}

pub(crate) fn shift_months(instant: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    }
}

pub(crate) fn utc_ymd(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

fn default_minute_width() -> f64 {
    12.0
}

fn default_hour_width() -> f64 {
    20.0
}

fn default_day_width() -> f64 {
    12.0
}

fn default_month_width() -> f64 {
    12.0
}

fn default_year_width() -> f64 {
    12.0
}

/// Fixed grid cell width in pixels for every scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleGridWidths {
    #[serde(default = "default_minute_width")]
    pub minute: f64,
    #[serde(default = "default_hour_width")]
    pub hour: f64,
    #[serde(default = "default_day_width")]
    pub day: f64,
    #[serde(default = "default_month_width")]
    pub month: f64,
    #[serde(default = "default_year_width")]
    pub year: f64,
}

impl Default for TimeScaleGridWidths {
    fn default() -> Self {
        Self {
            minute: default_minute_width(),
            hour: default_hour_width(),
            day: default_day_width(),
            month: default_month_width(),
            year: default_year_width(),
        }
    }
}

impl TimeScaleGridWidths {
    #[must_use]
    pub fn for_scale(self, scale: TimeScale) -> f64 {
        match scale {
            TimeScale::Minute => self.minute,
            TimeScale::Hour => self.hour,
            TimeScale::Day => self.day,
            TimeScale::Month => self.month,
            TimeScale::Year => self.year,
        }
    }

    pub(crate) fn validate(self) -> AxisResult<Self> {
        for scale in TimeScale::ALL {
            let width = self.for_scale(scale);
            if !width.is_finite() || width <= 0.0 {
                return Err(AxisError::InvalidData(format!(
                    "grid width for `{scale:?}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}
