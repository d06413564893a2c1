use chrono::{DateTime, TimeDelta, Utc};

use crate::core::window::span_millis_f64;
use crate::core::{Rect, TimeWindow};
use crate::error::{AxisError, AxisResult};

/// Linear map between instants in a time window and horizontal pixel
/// offsets inside a target rect.
///
/// Both directions share the same span division, so round-tripping an
/// instant through `time_to_x` and `x_to_time` reproduces it to
/// millisecond resolution. The window invariant guarantees a positive
/// span; only the rect needs validating here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    start: DateTime<Utc>,
    span_ms: f64,
    rect: Rect,
}

impl AxisMapper {
    pub fn new(window: TimeWindow, rect: Rect) -> AxisResult<Self> {
        if !rect.is_valid() {
            return Err(AxisError::InvalidRect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            });
        }

        Ok(Self {
            start: window.start(),
            span_ms: window.span_millis(),
            rect,
        })
    }

    /// Maps an instant to a pixel offset.
    ///
    /// Instants outside the window map outside `[rect.x, rect.x + width]`;
    /// callers that sweep truncated unit boundaries rely on this for the
    /// leading notch just left of the window start.
    #[must_use]
    pub fn time_to_x(&self, t: DateTime<Utc>) -> f64 {
        let offset_ms = span_millis_f64(t - self.start);
        offset_ms / self.span_ms * self.rect.width + self.rect.x
    }

    /// Maps a pixel offset back to an instant.
    ///
    /// Returns `None` when `px` lies outside the rect's horizontal extent.
    /// That is the normal outcome for a wheel cursor over axis padding,
    /// not an error.
    #[must_use]
    pub fn x_to_time(&self, px: f64) -> Option<DateTime<Utc>> {
        if !self.rect.contains_x(px) {
            return None;
        }

        let frac = (px - self.rect.x) / self.rect.width;
        let offset_ms = (frac * self.span_ms).round() as i64;
        self.start.checked_add_signed(TimeDelta::milliseconds(offset_ms))
    }
}
