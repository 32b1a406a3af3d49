//! timeline-axis: virtualized timeline axis navigation engine.
//!
//! The axis materializes a bounded window of calendar cells around an anchor
//! date and extends it lazily while the user pans. Two draggers mark the
//! selected (and optional comparison) dates, and a tolerant date input
//! validator lives in [`date_input`].

pub mod api;
pub mod core;
pub mod date_input;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{AxisEngine, AxisEngineConfig};
pub use error::{AxisError, AxisResult};
