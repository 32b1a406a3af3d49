use std::collections::VecDeque;
use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::time_scale::{TimeScale, utc_ymd};
use super::types::TimelineLimits;

/// One grid cell of the axis: the unit start and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub raw_instant: DateTime<Utc>,
    pub display_label: String,
}

impl GridCell {
    #[must_use]
    pub fn new(raw_instant: DateTime<Utc>, scale: TimeScale) -> Self {
        Self {
            raw_instant,
            display_label: scale.format_label(raw_instant),
        }
    }
}

/// Contiguous, ascending window of grid cells currently materialized on the axis.
///
/// Only the axis engine patches a range in place; everybody else reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    cells: VecDeque<GridCell>,
}

impl VisibleRange {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    #[must_use]
    pub fn front_instant(&self) -> Option<DateTime<Utc>> {
        self.cells.front().map(|cell| cell.raw_instant)
    }

    #[must_use]
    pub fn back_instant(&self) -> Option<DateTime<Utc>> {
        self.cells.back().map(|cell| cell.raw_instant)
    }

    /// Inclusive `[front, back]` membership test.
    #[must_use]
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        match (self.front_instant(), self.back_instant()) {
            (Some(front), Some(back)) => instant >= front && instant <= back,
            _ => false,
        }
    }

    /// Checks ascending order with exactly one `scale` unit between neighbours.
    #[must_use]
    pub fn is_contiguous(&self, scale: TimeScale) -> bool {
        self.cells
            .iter()
            .zip(self.cells.iter().skip(1))
            .all(|(a, b)| scale.add_units(a.raw_instant, 1) == Some(b.raw_instant))
    }

    pub(crate) fn prepend(&mut self, other: VisibleRange) {
        for cell in other.cells.into_iter().rev() {
            self.cells.push_front(cell);
        }
    }

    pub(crate) fn append(&mut self, other: VisibleRange) {
        self.cells.extend(other.cells);
    }

    pub(crate) fn trim_front(&mut self, count: usize) {
        let count = count.min(self.cells.len());
        self.cells.drain(..count);
    }

    pub(crate) fn trim_back(&mut self, count: usize) {
        let keep = self.cells.len().saturating_sub(count);
        self.cells.truncate(keep);
    }
}

impl FromIterator<GridCell> for VisibleRange {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Builds the cells from `units_before` units ahead of the anchor's unit
/// start to `units_after` units past it, clipped to `limits`.
///
/// Negative counts move the respective end across the anchor, so
/// `(-1, n)` yields the `n` cells strictly after the anchor unit. Year scale
/// ignores anchor and counts and spans every year starting inside the limits.
#[must_use]
pub fn build_range(
    anchor: DateTime<Utc>,
    units_before: i64,
    units_after: i64,
    scale: TimeScale,
    limits: TimelineLimits,
) -> VisibleRange {
    if scale.is_materialized() {
        return build_year_range(limits);
    }

    let zeroed = scale.start_of(anchor);
    let first = units_before.saturating_neg();
    if units_after < first {
        return VisibleRange::default();
    }

    let mut cells = VecDeque::new();
    for step in first..=units_after {
        let Some(instant) = scale.add_units(zeroed, step) else {
            continue;
        };
        if instant < limits.start {
            continue;
        }
        if instant > limits.end {
            break;
        }
        cells.push_back(GridCell::new(instant, scale));
    }
    VisibleRange { cells }
}

/// Years whose January 1st falls inside `limits`.
///
/// A start after January 1st drops its own year, like any other cell that
/// begins before the limits.
pub(crate) fn year_cell_span(limits: TimelineLimits) -> RangeInclusive<i32> {
    let start_year = limits.start.year();
    let first = if TimeScale::Year.start_of(limits.start) < limits.start {
        start_year.saturating_add(1)
    } else {
        start_year
    };
    first..=limits.end.year()
}

fn build_year_range(limits: TimelineLimits) -> VisibleRange {
    year_cell_span(limits)
        .filter_map(|year| utc_ymd(year, 1, 1))
        .map(|instant| GridCell::new(instant, TimeScale::Year))
        .collect()
}
