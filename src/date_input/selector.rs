use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::days_in_month;
use crate::error::{AxisError, AxisResult};

use super::field::{DateField, FieldValidity, MONTH_LABELS, PendingFields};

/// Result of folding the pending fields into a candidate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateCommit {
    /// The candidate became the committed date; all pending fields cleared.
    Committed(DateTime<Utc>),
    /// Candidate invalid or out of range; `field` carries the updated flag.
    Rejected { field: DateField },
    /// Roll date outside `[min, max]`.
    OutOfRange,
    /// Candidate equals the committed date; no commit. Pending fields and
    /// flags are reset unless a typed day had to be clamped.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
}

impl DateParts {
    fn of(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
            nanosecond: date.nanosecond(),
        }
    }

    fn month_length(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Clamps the day to the month length; `false` when clamping was needed.
    fn clamp_day(&mut self) -> bool {
        let max = self.month_length();
        if self.day > max {
            self.day = max;
            return false;
        }
        true
    }

    fn to_datetime(self) -> Option<DateTime<Utc>> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day.min(self.month_length()))?
            .and_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)
            .map(|naive| naive.and_utc())
    }
}

struct FoldOutcome {
    candidate: Option<DateTime<Utc>>,
    valid: bool,
    /// Whether the checked field's own check failed.
    triggered: bool,
}

/// Year/month/day/hour/minute entry validator.
///
/// Tolerates transient invalid combinations: a typed value stays pending
/// until the other fields make a valid date out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSelector {
    committed: DateTime<Utc>,
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    pending: PendingFields,
    validity: FieldValidity,
    focused: Option<DateField>,
    previous_focus: Option<DateField>,
    last_edited: Option<DateField>,
    subdaily_mode: bool,
}

impl DateSelector {
    pub fn new(committed: DateTime<Utc>, min: DateTime<Utc>, max: DateTime<Utc>) -> AxisResult<Self> {
        validate_bounds(min, max)?;
        Ok(Self {
            committed,
            min,
            max,
            pending: PendingFields::default(),
            validity: FieldValidity::default(),
            focused: None,
            previous_focus: None,
            last_edited: None,
            subdaily_mode: false,
        })
    }

    #[must_use]
    pub fn with_subdaily_mode(mut self, subdaily_mode: bool) -> Self {
        self.subdaily_mode = subdaily_mode;
        self
    }

    #[must_use]
    pub fn committed(&self) -> DateTime<Utc> {
        self.committed
    }

    #[must_use]
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn pending(&self) -> PendingFields {
        self.pending
    }

    #[must_use]
    pub fn validity(&self) -> FieldValidity {
        self.validity
    }

    #[must_use]
    pub fn is_field_valid(&self, field: DateField) -> bool {
        self.validity.get(field)
    }

    #[must_use]
    pub fn focused(&self) -> Option<DateField> {
        self.focused
    }

    #[must_use]
    pub fn last_edited(&self) -> Option<DateField> {
        self.last_edited
    }

    #[must_use]
    pub fn subdaily_mode(&self) -> bool {
        self.subdaily_mode
    }

    pub fn set_subdaily_mode(&mut self, subdaily_mode: bool) {
        self.subdaily_mode = subdaily_mode;
    }

    /// External date change; pending edits survive it.
    pub fn set_committed(&mut self, committed: DateTime<Utc>) {
        self.committed = committed;
    }

    pub fn set_bounds(&mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> AxisResult<()> {
        validate_bounds(min, max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Boxes shown to the user: hour and minute only in sub-daily mode.
    pub fn visible_fields(&self) -> impl Iterator<Item = DateField> + '_ {
        DateField::ALL
            .into_iter()
            .filter(|field| self.subdaily_mode || !field.is_subdaily())
    }

    #[must_use]
    pub fn max_tab(&self) -> u8 {
        if self.subdaily_mode {
            DateField::Minute.tab_index()
        } else {
            DateField::Day.tab_index()
        }
    }

    pub fn focus(&mut self, field: Option<DateField>) {
        self.focused = field;
    }

    /// Moves focus to tab `index`, wrapping past either end.
    pub fn change_tab(&mut self, index: i32) -> Option<DateField> {
        let max = i32::from(self.max_tab());
        let current = self.focused.map_or(0, |field| i32::from(field.tab_index()));
        let next = if index > current {
            if index > max { 1 } else { index }
        } else if index < 1 {
            max
        } else {
            index
        };
        self.previous_focus = self.focused;
        self.focused = u8::try_from(next).ok().and_then(DateField::from_tab_index);
        self.focused
    }

    /// Text shown in a box: the pending value, else the committed one.
    #[must_use]
    pub fn display_value(&self, field: DateField) -> String {
        let value = self.pending.get(field).unwrap_or_else(|| match field {
            DateField::Year => self.committed.year(),
            DateField::Month => self.committed.month() as i32,
            DateField::Day => self.committed.day() as i32,
            DateField::Hour => self.committed.hour() as i32,
            DateField::Minute => self.committed.minute() as i32,
        });
        match field {
            DateField::Year => format!("{value:04}"),
            DateField::Month => usize::try_from(value - 1)
                .ok()
                .and_then(|index| MONTH_LABELS.get(index))
                .map_or_else(|| value.to_string(), |label| (*label).to_owned()),
            DateField::Day | DateField::Hour | DateField::Minute => format!("{value:02}"),
        }
    }

    /// Records raw input for `field` and tries to commit.
    pub fn enter_field(&mut self, field: DateField, raw: &str) -> DateCommit {
        self.last_edited = Some(field);
        let Some(value) = field.parse(raw) else {
            debug!(field = ?field, raw, "unparseable date field input");
            self.validity.set(field, false);
            return DateCommit::Rejected { field };
        };
        self.pending.set(field, value);
        self.update_date(field)
    }

    /// Commits a date picked by rolling (arrow keys), bounds inclusive.
    pub fn roll_date(&mut self, date: DateTime<Utc>) -> DateCommit {
        if date == self.committed {
            return DateCommit::Unchanged;
        }
        if date < self.min || date > self.max {
            debug!(date = %date, "roll date outside bounds");
            return DateCommit::OutOfRange;
        }
        self.commit(date)
    }

    fn update_date(&mut self, checked: DateField) -> DateCommit {
        let outcome = self.fold(checked);
        let Some(candidate) = outcome.candidate else {
            self.validity.set(checked, false);
            return DateCommit::Rejected { field: checked };
        };
        if candidate == self.committed {
            // A clamped day stays pending so a later month can still take it.
            if outcome.valid {
                trace!(field = ?checked, "date fields match the committed date");
                self.pending.clear();
                self.validity = FieldValidity::default();
            }
            return DateCommit::Unchanged;
        }
        if outcome.valid && self.within_bounds(candidate) {
            return self.commit(candidate);
        }

        debug!(
            field = ?checked,
            candidate = %candidate,
            valid = outcome.valid,
            "date candidate rejected"
        );
        self.validity.set(checked, !outcome.triggered);
        DateCommit::Rejected { field: checked }
    }

    fn commit(&mut self, date: DateTime<Utc>) -> DateCommit {
        debug!(from = %self.committed, to = %date, "date committed");
        self.committed = date;
        self.pending.clear();
        self.validity = FieldValidity::default();
        DateCommit::Committed(date)
    }

    /// Lower bound exclusive, upper bound inclusive.
    fn within_bounds(&self, date: DateTime<Utc>) -> bool {
        date > self.min && date <= self.max
    }

    fn parts_within_bounds(&self, parts: DateParts) -> bool {
        parts
            .to_datetime()
            .is_some_and(|date| self.within_bounds(date))
    }

    /// Folds pending fields over the committed date in the order
    /// year, day (no month), month, day with month, hour, minute.
    ///
    /// Each field's own check applies just that field to the committed date.
    fn fold(&self, checked: DateField) -> FoldOutcome {
        let base = DateParts::of(self.committed);
        let pending = self.pending;
        let mut parts = base;
        let mut valid = true;
        let mut triggered = false;

        if let Some(year) = pending.year {
            parts.year = year;
            valid &= parts.clamp_day();
            if checked == DateField::Year {
                let own = DateParts { year, ..base };
                triggered = !valid || !self.parts_within_bounds(own);
            }
        }

        if let (Some(day), None) = (pending.day, pending.month) {
            parts.day = day;
            valid &= parts.clamp_day();
            if checked == DateField::Day {
                let own = DateParts { day, ..base };
                triggered = !valid || !self.parts_within_bounds(own);
            }
        }

        if let Some(month) = pending.month {
            let next_length = days_in_month(parts.year, month);
            let typed_day = pending.day.unwrap_or(base.day);
            if parts.month_length() > next_length && typed_day > next_length {
                valid = false;
            }
            parts.month = month;
            if pending.day.is_some() {
                parts.day = 1;
            } else {
                valid &= parts.clamp_day();
            }
            if checked == DateField::Month {
                let own = DateParts { month, ..base };
                triggered = !valid || !self.parts_within_bounds(own);
            }
        }

        if let (Some(day), Some(month)) = (pending.day, pending.month) {
            parts.day = day;
            valid &= parts.clamp_day();
            if matches!(checked, DateField::Month | DateField::Day) {
                let own = DateParts { month, day, ..base };
                triggered = !valid || !self.parts_within_bounds(own);
            }
        }

        if let Some(hour) = pending.hour {
            parts.hour = hour;
            if checked == DateField::Hour {
                triggered = !self.parts_within_bounds(DateParts { hour, ..base });
            }
        }

        if let Some(minute) = pending.minute {
            parts.minute = minute;
            if checked == DateField::Minute {
                triggered = !self.parts_within_bounds(DateParts { minute, ..base });
            }
        }

        FoldOutcome {
            candidate: parts.to_datetime(),
            valid,
            triggered,
        }
    }
}

fn validate_bounds(min: DateTime<Utc>, max: DateTime<Utc>) -> AxisResult<()> {
    if min >= max {
        return Err(AxisError::InvalidLimits {
            start: min,
            end: max,
        });
    }
    Ok(())
}
