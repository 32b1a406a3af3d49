//! Host-facing hooks live here.
//!
//! Keep hooks observational and avoid coupling them into core paths.

pub mod listeners;

pub use listeners::{AxisContext, AxisEvent, AxisListener};
