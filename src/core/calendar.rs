use chrono::{DateTime, Datelike, Utc};

use super::time_scale::{TimeScale, shift_months};

#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[must_use]
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days in `month` (1-based) of `year`. Out-of-range months yield 0.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Signed fractional number of `scale` units from `from` to `to`.
///
/// Positive when `to` is later. Fixed scales divide the millisecond
/// distance; month interpolates inside the month the distance lands in, and
/// year is the month distance divided by twelve.
#[must_use]
pub fn calendar_diff(from: DateTime<Utc>, to: DateTime<Utc>, scale: TimeScale) -> f64 {
    match scale.fixed_millis() {
        Some(unit) => millis_between(from, to) / unit as f64,
        None => {
            let months = month_diff(from, to);
            if scale == TimeScale::Year {
                months / 12.0
            } else {
                months
            }
        }
    }
}

fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64
}

fn month_diff(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let whole = i64::from(to.year() - from.year()) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    let Some(anchor) = shift_months(from, whole) else {
        return whole as f64;
    };

    let neighbour = if to < anchor {
        shift_months(from, whole - 1)
    } else {
        shift_months(from, whole + 1)
    };
    let Some(neighbour) = neighbour else {
        return whole as f64;
    };

    let span = millis_between(anchor, neighbour).abs();
    if span == 0.0 {
        return whole as f64;
    }
    whole as f64 + millis_between(anchor, to) / span
}
