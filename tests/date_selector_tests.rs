use chrono::{DateTime, TimeZone, Utc};
use timeline_axis::date_input::{DateCommit, DateField, DateSelector};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn selector() -> DateSelector {
    DateSelector::new(
        utc(2019, 6, 15, 0, 0),
        utc(2000, 1, 1, 0, 0),
        utc(2020, 1, 1, 0, 0),
    )
    .expect("selector")
}

#[test]
fn day_31_survives_february_until_october() {
    let mut selector = selector();

    let day = selector.enter_field(DateField::Day, "31");
    assert_eq!(day, DateCommit::Rejected { field: DateField::Day });

    let february = selector.enter_field(DateField::Month, "FEB");
    assert_eq!(february, DateCommit::Rejected { field: DateField::Month });
    assert!(!selector.is_field_valid(DateField::Month));
    assert_eq!(selector.pending().day, Some(31));
    assert_eq!(selector.display_value(DateField::Day), "31");
    assert_eq!(selector.display_value(DateField::Month), "FEB");
    assert_eq!(selector.committed(), utc(2019, 6, 15, 0, 0));

    let october = selector.enter_field(DateField::Month, "oct");
    assert_eq!(october, DateCommit::Committed(utc(2019, 10, 31, 0, 0)));
    assert_eq!(selector.committed(), utc(2019, 10, 31, 0, 0));
    assert!(selector.pending().is_empty());
    assert!(selector.validity().all_valid());
}

#[test]
fn out_of_range_year_flags_only_the_year() {
    let mut selector = selector();
    selector.enter_field(DateField::Day, "31");

    let result = selector.enter_field(DateField::Year, "2025");
    assert_eq!(result, DateCommit::Rejected { field: DateField::Year });

    let validity = selector.validity();
    assert!(!validity.year);
    assert!(validity.month);
    assert!(validity.hour);
    assert!(validity.minute);
    assert_eq!(selector.committed(), utc(2019, 6, 15, 0, 0));
    assert_eq!(selector.pending().year, Some(2025));
    assert_eq!(selector.pending().day, Some(31));
}

#[test]
fn lower_bound_is_exclusive_for_typed_dates() {
    let mut selector = DateSelector::new(
        utc(2000, 1, 2, 0, 0),
        utc(2000, 1, 1, 0, 0),
        utc(2020, 1, 1, 0, 0),
    )
    .expect("selector");

    let result = selector.enter_field(DateField::Day, "1");
    assert_eq!(result, DateCommit::Rejected { field: DateField::Day });
    assert!(!selector.is_field_valid(DateField::Day));

    assert_eq!(
        selector.roll_date(utc(2000, 1, 1, 0, 0)),
        DateCommit::Committed(utc(2000, 1, 1, 0, 0))
    );
}

#[test]
fn roll_date_outside_bounds_is_refused() {
    let mut selector = selector();
    assert_eq!(selector.roll_date(utc(2021, 1, 1, 0, 0)), DateCommit::OutOfRange);
    assert_eq!(selector.roll_date(utc(2019, 6, 15, 0, 0)), DateCommit::Unchanged);
    assert_eq!(selector.committed(), utc(2019, 6, 15, 0, 0));
}

#[test]
fn unchanged_candidate_resets_fields_without_committing() {
    let mut selector = selector();
    selector.enter_field(DateField::Year, "2025");
    assert!(!selector.is_field_valid(DateField::Year));

    let result = selector.enter_field(DateField::Year, "2019");
    assert_eq!(result, DateCommit::Unchanged);
    assert_eq!(selector.committed(), utc(2019, 6, 15, 0, 0));
    assert!(selector.pending().is_empty());
    assert!(selector.validity().all_valid());
}

#[test]
fn correcting_a_day_back_to_the_committed_value_clears_its_flag() {
    let mut selector = selector();

    let overflow = selector.enter_field(DateField::Day, "31");
    assert_eq!(overflow, DateCommit::Rejected { field: DateField::Day });
    assert!(!selector.is_field_valid(DateField::Day));

    let corrected = selector.enter_field(DateField::Day, "15");
    assert_eq!(corrected, DateCommit::Unchanged);
    assert!(selector.is_field_valid(DateField::Day));
    assert_eq!(selector.pending().day, None);
    assert_eq!(selector.display_value(DateField::Day), "15");
}

#[test]
fn clamped_day_matching_the_committed_date_stays_pending() {
    let mut selector = DateSelector::new(
        utc(2019, 6, 30, 0, 0),
        utc(2000, 1, 1, 0, 0),
        utc(2020, 1, 1, 0, 0),
    )
    .expect("selector");

    assert_eq!(selector.enter_field(DateField::Day, "31"), DateCommit::Unchanged);
    assert_eq!(selector.pending().day, Some(31));

    let october = selector.enter_field(DateField::Month, "OCT");
    assert_eq!(october, DateCommit::Committed(utc(2019, 10, 31, 0, 0)));
}

#[test]
fn unparseable_input_flags_the_field_and_keeps_pending_values() {
    let mut selector = selector();
    selector.enter_field(DateField::Day, "31");

    let result = selector.enter_field(DateField::Month, "XYZ");
    assert_eq!(result, DateCommit::Rejected { field: DateField::Month });
    assert!(!selector.is_field_valid(DateField::Month));
    assert_eq!(selector.pending().month, None);
    assert_eq!(selector.pending().day, Some(31));
}

#[test]
fn leap_day_year_change_waits_for_a_leap_year() {
    let mut selector = DateSelector::new(
        utc(2016, 2, 29, 0, 0),
        utc(2000, 1, 1, 0, 0),
        utc(2020, 1, 1, 0, 0),
    )
    .expect("selector");

    assert_eq!(
        selector.enter_field(DateField::Year, "2015"),
        DateCommit::Rejected { field: DateField::Year }
    );
    assert_eq!(
        selector.enter_field(DateField::Year, "2012"),
        DateCommit::Committed(utc(2012, 2, 29, 0, 0))
    );
}

#[test]
fn subdaily_fields_commit_with_time_of_day() {
    let mut selector = selector().with_subdaily_mode(true);
    assert_eq!(
        selector.enter_field(DateField::Hour, "13"),
        DateCommit::Committed(utc(2019, 6, 15, 13, 0))
    );
    assert_eq!(
        selector.enter_field(DateField::Minute, "5"),
        DateCommit::Committed(utc(2019, 6, 15, 13, 5))
    );
    assert_eq!(selector.display_value(DateField::Minute), "05");
    assert_eq!(selector.display_value(DateField::Hour), "13");
}

#[test]
fn tab_navigation_wraps_by_mode() {
    let mut selector = selector();
    assert_eq!(selector.max_tab(), 3);
    assert_eq!(selector.visible_fields().count(), 3);
    selector.focus(Some(DateField::Day));
    assert_eq!(selector.change_tab(4), Some(DateField::Year));
    assert_eq!(selector.change_tab(0), Some(DateField::Day));
    assert_eq!(selector.change_tab(2), Some(DateField::Month));

    selector.set_subdaily_mode(true);
    assert_eq!(selector.visible_fields().last(), Some(DateField::Minute));
    selector.focus(Some(DateField::Day));
    assert_eq!(selector.change_tab(4), Some(DateField::Hour));
    assert_eq!(selector.change_tab(5), Some(DateField::Minute));
    assert_eq!(selector.change_tab(6), Some(DateField::Year));
}

#[test]
fn reversed_bounds_are_rejected() {
    let err = DateSelector::new(
        utc(2019, 6, 15, 0, 0),
        utc(2020, 1, 1, 0, 0),
        utc(2000, 1, 1, 0, 0),
    )
    .expect_err("reversed bounds must fail");
    assert!(format!("{err}").contains("invalid timeline limits"));
}
