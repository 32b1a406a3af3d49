pub mod calendar;
pub mod coordinate;
pub mod geometry;
pub mod time_grid;
pub mod time_scale;
pub mod types;

pub use calendar::{calendar_diff, days_in_month, days_in_year, is_leap_year};
pub use coordinate::{AxisCoordinateSpace, instant_to_pixel, offset_to_instant, pixel_to_instant};
pub use geometry::{AxisGeometry, WindowLayout, resolve_window_layout, validate_axis_geometry};
pub use time_grid::{GridCell, VisibleRange, build_range};
pub use time_scale::{TimeScale, TimeScaleGridWidths};
pub use types::{DraggerId, TimelineLimits};
