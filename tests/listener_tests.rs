use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use timeline_axis::api::{AxisEngine, AxisEngineConfig};
use timeline_axis::core::{DraggerId, TimeScale, TimelineLimits};
use timeline_axis::extensions::{AxisContext, AxisEvent, AxisListener};
use timeline_axis::interaction::InteractionMode;

#[derive(Clone)]
struct RecordingListener {
    id: String,
    events: Rc<RefCell<Vec<(AxisEvent, AxisContext)>>>,
}

impl RecordingListener {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(AxisEvent, AxisContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl AxisListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: AxisEvent, context: AxisContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn engine() -> AxisEngine {
    let limits = TimelineLimits::new(utc(2000, 1, 1), utc(2020, 1, 1)).expect("limits");
    let config = AxisEngineConfig::new(limits, TimeScale::Day, 1200.0, utc(2010, 6, 15))
        .with_compare_date(utc(2010, 6, 1));
    AxisEngine::new(config).expect("engine init")
}

fn event_kind(event: &AxisEvent) -> &'static str {
    match event {
        AxisEvent::DateChanged { .. } => "date",
        AxisEvent::ScaleChangeRequested { .. } => "scale",
        AxisEvent::SelectedDraggerChangeRequested { .. } => "select",
        AxisEvent::AnimationRangeChanged { .. } => "animation",
        AxisEvent::WindowRebuilt { .. } => "rebuilt",
        AxisEvent::WindowExtended { .. } => "extended",
    }
}

#[test]
fn listener_receives_deterministic_event_sequence() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.dragger_drag_start(DraggerId::Primary);
    engine
        .drag_dragger_by(DraggerId::Primary, 12.0)
        .expect("drag");
    engine.dragger_drag_end().expect("drag end");
    engine.wheel(1.0);
    engine.select_dragger(DraggerId::Secondary);
    engine
        .set_selected_dates(utc(2014, 2, 1), Some(utc(2010, 6, 1)))
        .expect("far jump");

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(kinds, vec!["date", "scale", "select", "rebuilt"]);

    let recorded = events.borrow();
    let (first, context) = recorded[0];
    assert_eq!(
        first,
        AxisEvent::DateChanged {
            instant: utc(2010, 6, 16),
            dragger: DraggerId::Primary
        }
    );
    assert_eq!(context.interaction_mode, InteractionMode::DraggingDragger(DraggerId::Primary));
    assert!(context.compare_mode_active);
    assert_eq!(
        recorded[1].0,
        AxisEvent::ScaleChangeRequested {
            next_scale_index: 2,
            next_scale: TimeScale::Month
        }
    );
}

#[test]
fn pan_extension_is_reported() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.pan_start();
    engine.pan_by(-400.0).expect("pan");
    engine.pan_end().expect("pan end");

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0].0,
        AxisEvent::WindowExtended {
            added: 26,
            removed: 26
        }
    );
    assert_eq!(recorded[0].1.cells_len, 151);
}

#[test]
fn listener_ids_must_be_unique_and_non_empty() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("a", events.clone())))
        .expect("first listener");

    let err = engine
        .register_listener(Box::new(RecordingListener::new("a", events.clone())))
        .expect_err("duplicate id must fail");
    assert!(format!("{err}").contains("already registered"));

    let err = engine
        .register_listener(Box::new(RecordingListener::new("", events.clone())))
        .expect_err("empty id must fail");
    assert!(format!("{err}").contains("must not be empty"));

    assert_eq!(engine.listener_count(), 1);
    assert!(engine.has_listener("a"));
    assert!(engine.unregister_listener("a"));
    assert!(!engine.unregister_listener("a"));
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn unregistered_listener_stops_receiving_events() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");
    engine.wheel(1.0);
    assert!(engine.unregister_listener("recorder"));
    engine.wheel(1.0);

    assert_eq!(events.borrow().len(), 1);
}
