use chrono::{DateTime, Utc};
use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("degenerate axis geometry: axis_width={axis_width}, grid_width={grid_width}")]
    DegenerateGeometry { axis_width: f64, grid_width: f64 },

    #[error("invalid timeline limits: start={start}, end={end}")]
    InvalidLimits {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
