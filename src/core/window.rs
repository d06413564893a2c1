use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Visible time range of the axis.
///
/// Invariant: `start < end`. A degenerate or inverted window is rejected at
/// construction and can therefore never reach the coordinate mapper, whose
/// span division assumes a positive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AxisResult<Self> {
        if start >= end {
            return Err(AxisError::DegenerateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn span(self) -> TimeDelta {
        self.end - self.start
    }

    /// Span as a fractional millisecond count, the scalar form used by the
    /// granularity selector and the gesture math.
    #[must_use]
    pub fn span_millis(self) -> f64 {
        span_millis_f64(self.span())
    }
}

/// Converts a delta to fractional milliseconds without losing sub-millisecond
/// precision.
#[must_use]
pub fn span_millis_f64(delta: TimeDelta) -> f64 {
    let subsec_nanos = delta.subsec_nanos();
    delta.num_seconds() as f64 * 1_000.0 + f64::from(subsec_nanos) / 1_000_000.0
}
