use chrono::{DateTime, Utc};
use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid axis rect: x={x}, y={y}, width={width}, height={height}")]
    InvalidRect { x: f64, y: f64, width: f64, height: f64 },

    #[error("degenerate time window: start={start}, end={end}")]
    DegenerateWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
