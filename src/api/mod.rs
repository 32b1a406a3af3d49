//! Engine facade and its per-concern controllers.

mod animation_range;
mod behavior;
mod dragger;
pub mod dragger_controller;
mod dragger_interaction_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod event_dispatch;
mod hover_controller;
mod json_contract;
mod listener_registry;
mod pan_controller;
mod scale_controller;
mod selection_controller;
mod snapshot_controller;
mod validation;
mod window_controller;

pub use animation_range::AnimationRange;
pub use behavior::AxisBehavior;
pub use dragger::{Dragger, DraggerPair};
pub use dragger_controller::{DragOutcome, DraggerFrame, ViewportCheck};
pub use engine::{AxisEngine, SelectedDates};
pub use engine_config::AxisEngineConfig;
pub use engine_snapshot::AxisSnapshot;
pub use json_contract::{AXIS_SNAPSHOT_JSON_SCHEMA_V1, AxisSnapshotJsonContractV1};
