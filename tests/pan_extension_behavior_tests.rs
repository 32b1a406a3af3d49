use chrono::{DateTime, TimeZone, Utc};
use timeline_axis::api::{AxisEngine, AxisEngineConfig};
use timeline_axis::core::{DraggerId, TimeScale, TimelineLimits};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn engine(scale: TimeScale) -> AxisEngine {
    let limits = TimelineLimits::new(utc(2000, 1, 1), utc(2020, 1, 1)).expect("limits");
    let config = AxisEngineConfig::new(limits, scale, 1200.0, utc(2010, 6, 15));
    AxisEngine::new(config).expect("engine init")
}

#[test]
fn initial_window_places_selected_date_at_anchor_ratio() {
    let engine = engine(TimeScale::Day);
    let geometry = engine.geometry();

    assert_eq!(engine.visible_range().len(), 151);
    assert_eq!(geometry.window_cells, 151);
    assert!((geometry.position - geometry.midpoint).abs() <= 1e-12);
    assert_eq!(engine.sentinel_counter(), 0.0);
    assert!((engine.extension_threshold() - 26.0 * 12.0).abs() <= 1e-12);

    let x = engine.instant_to_axis_x(utc(2010, 6, 15)).expect("axis x");
    assert!((x - 960.0).abs() <= 1e-9);
    let primary = engine.dragger(DraggerId::Primary);
    assert!((primary.pixel_position - (960.0 - 49.0)).abs() <= 1e-9);
    assert!(primary.visible);
}

#[test]
fn zero_delta_pan_changes_nothing() {
    let mut engine = engine(TimeScale::Day);
    let before = engine.snapshot();

    engine.pan_start();
    engine.pan_by(0.0).expect("zero pan");

    let after = engine.snapshot();
    assert_eq!(before.cells, after.cells);
    assert_eq!(before.geometry, after.geometry);
    assert_eq!(before.draggers, after.draggers);
    assert_eq!(before.sentinel_counter, after.sentinel_counter);
}

#[test]
fn small_pan_accumulates_without_touching_the_window() {
    let mut engine = engine(TimeScale::Day);
    let cells_before = engine.snapshot().cells;

    engine.pan_start();
    engine.pan_by(-100.0).expect("pan");
    engine.pan_by(-50.0).expect("pan");

    assert_eq!(engine.snapshot().cells, cells_before);
    assert!((engine.sentinel_counter() + 150.0).abs() <= 1e-12);
}

#[test]
fn future_extension_keeps_screen_positions() {
    let mut engine = engine(TimeScale::Day);
    let probe = utc(2010, 7, 1);
    let x_before = engine.instant_to_axis_x(probe).expect("axis x");
    let front_before = engine.visible_range().front_instant().expect("front");

    engine.pan_start();
    engine.pan_by(-400.0).expect("pan");

    let x_after = engine.instant_to_axis_x(probe).expect("axis x");
    assert!((x_after - (x_before - 400.0)).abs() <= 1e-9);

    let range = engine.visible_range();
    assert_eq!(range.len(), 151);
    assert!(range.is_contiguous(TimeScale::Day));
    assert_eq!(
        range.front_instant(),
        Some(front_before + chrono::TimeDelta::days(26))
    );
    assert!((engine.sentinel_counter() + 88.0).abs() <= 1e-9);
}

#[test]
fn past_extension_keeps_screen_positions() {
    let mut engine = engine(TimeScale::Day);
    let probe = utc(2010, 5, 1);
    let x_before = engine.instant_to_axis_x(probe).expect("axis x");
    let back_before = engine.visible_range().back_instant().expect("back");

    engine.pan_start();
    for _ in 0..4 {
        engine.pan_by(100.0).expect("pan");
    }
    engine.pan_end().expect("pan end");

    let x_after = engine.instant_to_axis_x(probe).expect("axis x");
    assert!((x_after - (x_before + 400.0)).abs() <= 1e-9);
    assert!(engine.visible_range().back_instant().expect("back") < back_before);
    assert!(engine.visible_range().is_contiguous(TimeScale::Day));
}

#[test]
fn pan_just_short_of_threshold_keeps_left_edge_covered() {
    let mut engine = engine(TimeScale::Day);
    let front_before = engine.visible_range().front_instant().expect("front");

    engine.pan_start();
    // 300px of past cells sit beyond the left edge, the threshold is 312px.
    engine.pan_by(305.0).expect("pan");

    assert!((engine.sentinel_counter() - 305.0).abs() <= 1e-12);
    let positions = engine.cell_positions();
    let first = positions.first().copied().expect("first cell");
    let last = positions.last().copied().expect("last cell");
    assert!(first <= 0.0, "first cell starts at {first}");
    assert!(last + engine.grid_width() >= engine.axis_width());
    assert_eq!(positions.len(), 151);
    assert_eq!(
        engine.visible_range().front_instant(),
        Some(front_before - chrono::TimeDelta::days(1))
    );
    assert!(engine.visible_range().is_contiguous(TimeScale::Day));
}

#[test]
fn pan_end_folds_position_into_transform() {
    let mut engine = engine(TimeScale::Day);
    engine.pan_start();
    engine.pan_by(-37.5).expect("pan");
    let x_during = engine.instant_to_axis_x(utc(2010, 6, 15)).expect("axis x");
    engine.pan_end().expect("pan end");

    let geometry = engine.geometry();
    assert!((geometry.position - geometry.midpoint).abs() <= 1e-12);
    let x_after = engine.instant_to_axis_x(utc(2010, 6, 15)).expect("axis x");
    assert!((x_after - x_during).abs() <= 1e-9);
}

#[test]
fn pan_stops_when_timeline_start_reaches_axis_centre() {
    let limits = TimelineLimits::new(utc(2000, 1, 1), utc(2020, 1, 1)).expect("limits");
    // 60 days after the start: the start cell is drawn at x = 960 - 720.
    let config = AxisEngineConfig::new(limits, TimeScale::Day, 1200.0, utc(2000, 3, 1));
    let mut engine = AxisEngine::new(config).expect("engine init");

    engine.pan_start();
    for _ in 0..20 {
        engine.pan_by(300.0).expect("pan");
    }
    engine.pan_end().expect("pan end");

    let start_x = engine.instant_to_axis_x(utc(2000, 1, 1)).expect("axis x");
    assert!((start_x - 600.0).abs() <= 1e-9);
    assert_eq!(engine.visible_range().front_instant(), Some(utc(2000, 1, 1)));
}

#[test]
fn year_scale_never_extends() {
    let mut engine = engine(TimeScale::Year);
    let cells_before = engine.snapshot().cells;
    assert_eq!(cells_before.len(), 21);

    engine.pan_start();
    engine.pan_by(-5.0).expect("pan");
    engine.pan_by(3.0).expect("pan");
    engine.pan_end().expect("pan end");

    assert_eq!(engine.snapshot().cells, cells_before);
}

#[test]
fn non_finite_pan_delta_is_rejected() {
    let mut engine = engine(TimeScale::Day);
    engine.pan_start();
    let err = engine.pan_by(f64::NAN).expect_err("nan pan must fail");
    assert!(format!("{err}").contains("pan delta"));
}
