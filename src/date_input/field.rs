use serde::{Deserialize, Serialize};

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// One entry box of the date selector, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl DateField {
    pub const ALL: [DateField; 5] = [
        DateField::Year,
        DateField::Month,
        DateField::Day,
        DateField::Hour,
        DateField::Minute,
    ];

    /// 1-based tab index.
    #[must_use]
    pub fn tab_index(self) -> u8 {
        match self {
            Self::Year => 1,
            Self::Month => 2,
            Self::Day => 3,
            Self::Hour => 4,
            Self::Minute => 5,
        }
    }

    #[must_use]
    pub fn from_tab_index(index: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.tab_index() == index)
    }

    #[must_use]
    pub fn is_subdaily(self) -> bool {
        matches!(self, Self::Hour | Self::Minute)
    }

    /// Parses raw box input into the field's numeric value.
    ///
    /// Months accept `JAN`..`DEC` (any case) or `1`..`12`. Returns `None` for
    /// unparseable or out-of-range input.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<i32> {
        let raw = raw.trim();
        if self == Self::Month {
            if let Some(position) = MONTH_LABELS
                .iter()
                .position(|label| label.eq_ignore_ascii_case(raw))
            {
                return i32::try_from(position + 1).ok();
            }
        }
        let value: i32 = raw.parse().ok()?;
        let valid = match self {
            Self::Year => (1..=9999).contains(&value),
            Self::Month => (1..=12).contains(&value),
            Self::Day => (1..=31).contains(&value),
            Self::Hour => (0..=23).contains(&value),
            Self::Minute => (0..=59).contains(&value),
        };
        valid.then_some(value)
    }
}

/// Values typed into the boxes but not yet part of a committed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PendingFields {
    pub year: Option<i32>,
    /// 1-based.
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl PendingFields {
    #[must_use]
    pub fn get(&self, field: DateField) -> Option<i32> {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month.and_then(|v| i32::try_from(v).ok()),
            DateField::Day => self.day.and_then(|v| i32::try_from(v).ok()),
            DateField::Hour => self.hour.and_then(|v| i32::try_from(v).ok()),
            DateField::Minute => self.minute.and_then(|v| i32::try_from(v).ok()),
        }
    }

    /// Stores a value already range-checked by [`DateField::parse`].
    pub fn set(&mut self, field: DateField, value: i32) {
        let unsigned = u32::try_from(value).ok();
        match field {
            DateField::Year => self.year = Some(value),
            DateField::Month => self.month = unsigned,
            DateField::Day => self.day = unsigned,
            DateField::Hour => self.hour = unsigned,
            DateField::Minute => self.minute = unsigned,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field display validity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidity {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
}

impl Default for FieldValidity {
    fn default() -> Self {
        Self {
            year: true,
            month: true,
            day: true,
            hour: true,
            minute: true,
        }
    }
}

impl FieldValidity {
    #[must_use]
    pub fn get(&self, field: DateField) -> bool {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Day => self.day,
            DateField::Hour => self.hour,
            DateField::Minute => self.minute,
        }
    }

    pub fn set(&mut self, field: DateField, valid: bool) {
        match field {
            DateField::Year => self.year = valid,
            DateField::Month => self.month = valid,
            DateField::Day => self.day = valid,
            DateField::Hour => self.hour = valid,
            DateField::Minute => self.minute = valid,
        }
    }

    #[must_use]
    pub fn all_valid(&self) -> bool {
        DateField::ALL.into_iter().all(|field| self.get(field))
    }
}
