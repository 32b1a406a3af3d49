use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use timeline_axis::core::{TimeScale, TimelineLimits, build_range, instant_to_pixel, pixel_to_instant};

fn limits(start_shift_minutes: i64, end_shift_minutes: i64) -> TimelineLimits {
    TimelineLimits::new(
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap() + TimeDelta::minutes(start_shift_minutes),
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() - TimeDelta::minutes(end_shift_minutes),
    )
    .expect("limits")
}

fn scale_strategy() -> impl Strategy<Value = TimeScale> {
    prop::sample::select(TimeScale::ALL.to_vec())
}

fn anchor_from_seconds(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap() + TimeDelta::seconds(seconds)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn build_range_is_ascending_gap_free_and_clipped(
        scale in scale_strategy(),
        // 1999..2021: anchors on both sides of the limits included.
        seconds in 0i64..(22 * 366 * 86_400),
        before in 0i64..200,
        after in 0i64..200,
        // Limits off unit boundaries, up to a year inside each end.
        start_shift in 0i64..(366 * 1_440),
        end_shift in 0i64..(366 * 1_440)
    ) {
        let limits = limits(start_shift, end_shift);
        let range = build_range(anchor_from_seconds(seconds), before, after, scale, limits);

        prop_assert!(range.is_contiguous(scale));
        for cell in range.iter() {
            prop_assert!(limits.contains(cell.raw_instant));
            prop_assert_eq!(scale.start_of(cell.raw_instant), cell.raw_instant);
        }
        if scale != TimeScale::Year {
            prop_assert!(range.len() as i64 <= before + after + 1);
        }
    }

    #[test]
    fn fixed_scale_pixel_round_trip_within_one_millisecond(
        scale in prop::sample::select(vec![TimeScale::Minute, TimeScale::Hour, TimeScale::Day]),
        seconds in (366 * 86_400i64)..(20 * 365 * 86_400),
        millis in 0i64..1_000,
        cells_ahead in 0i64..400,
        grid_width in 4.0f64..40.0
    ) {
        let t = anchor_from_seconds(seconds) + TimeDelta::milliseconds(millis);
        let front = scale.add_units(scale.start_of(t), -cells_ahead).expect("front cell");
        let next = scale.add_units(front, 1).expect("next cell");

        let px = instant_to_pixel(t, front, scale, grid_width);
        let back = pixel_to_instant(px, front, next, grid_width);
        prop_assert!((back - t).num_milliseconds().abs() <= 1);
    }
}
