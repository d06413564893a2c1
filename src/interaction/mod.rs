//! Wheel-gesture interpretation for the time axis.
//!
//! One wheel stream is treated as a single coherent gesture: the first
//! event decides zoom vs pan, and that decision is held while events keep
//! arriving within the debounce interval. The debounce is modeled as an
//! explicit deadline instant compared against a caller-supplied "now", so
//! the controller needs no platform timer and is testable without real
//! time.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::window::span_millis_f64;
use crate::core::{AxisMapper, Rect, TimeWindow};
use crate::error::{AxisError, AxisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Zoom,
    Pan,
}

/// One wheel notification from the host, with the cursor offset relative
/// to the drawing surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub cursor_x: f64,
}

impl WheelEvent {
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64, cursor_x: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            cursor_x,
        }
    }
}

/// Tuning for wheel zoom/pan stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Relative span change per zoom step.
    pub zoom_speed: f64,
    /// Fraction of the visible span shifted per pan step.
    pub pan_speed: f64,
    /// Idle interval after which the gesture mode is re-decided.
    pub debounce_ms: i64,
    /// Deltas at or below this magnitude are treated as jitter.
    pub noise_threshold: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            zoom_speed: 0.05,
            pan_speed: 0.015,
            debounce_ms: 500,
            noise_threshold: 0.5,
        }
    }
}

impl GestureTuning {
    pub fn validate(self) -> AxisResult<Self> {
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 0.0 {
            return Err(AxisError::InvalidData(
                "zoom speed must be finite and > 0".to_owned(),
            ));
        }
        if !self.pan_speed.is_finite() || self.pan_speed <= 0.0 {
            return Err(AxisError::InvalidData(
                "pan speed must be finite and > 0".to_owned(),
            ));
        }
        if self.debounce_ms <= 0 {
            return Err(AxisError::InvalidData(
                "gesture debounce must be > 0 ms".to_owned(),
            ));
        }
        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(AxisError::InvalidData(
                "noise threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Short-lived zoom/pan mode lock for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    mode: Option<GestureMode>,
    deadline: Option<DateTime<Utc>>,
}

impl GestureState {
    /// Last decided mode, regardless of whether the lock is still live.
    #[must_use]
    pub fn mode(self) -> Option<GestureMode> {
        self.mode
    }

    /// True while the mode lock is held at `now`.
    #[must_use]
    pub fn is_live(self, now: DateTime<Utc>) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Reuses the live mode or decides a fresh one from the event deltas,
    /// then rearms the deadline. A live lock intentionally keeps the
    /// previous mode even when the delta magnitudes flip.
    fn resolve_mode(
        &mut self,
        event: WheelEvent,
        now: DateTime<Utc>,
        debounce: TimeDelta,
    ) -> GestureMode {
        let mode = match self.mode {
            Some(mode) if self.is_live(now) => mode,
            _ => {
                if event.delta_y.abs() > event.delta_x.abs() {
                    GestureMode::Zoom
                } else {
                    GestureMode::Pan
                }
            }
        };

        self.mode = Some(mode);
        self.deadline = now.checked_add_signed(debounce);
        mode
    }
}

/// Interprets one wheel event against the current window.
///
/// Returns `Ok(Some(next))` when a new window should be committed,
/// `Ok(None)` when the event is ignored (cursor off the axis, jitter below
/// the noise threshold, or a result that would violate the window
/// invariant — the prior window is retained in all three cases).
pub fn apply_wheel(
    window: TimeWindow,
    rect: Rect,
    tuning: GestureTuning,
    state: &mut GestureState,
    event: WheelEvent,
    now: DateTime<Utc>,
) -> AxisResult<Option<TimeWindow>> {
    let tuning = tuning.validate()?;
    if !event.delta_x.is_finite() || !event.delta_y.is_finite() || !event.cursor_x.is_finite() {
        return Err(AxisError::InvalidData(
            "wheel deltas and cursor must be finite".to_owned(),
        ));
    }

    let mapper = AxisMapper::new(window, rect)?;
    let Some(anchor) = mapper.x_to_time(event.cursor_x) else {
        trace!(cursor_x = event.cursor_x, "wheel cursor outside axis rect");
        return Ok(None);
    };

    let mode = state.resolve_mode(event, now, TimeDelta::milliseconds(tuning.debounce_ms));

    let mut zoom_factor = 1.0;
    let mut pan_fraction = 0.0;
    match mode {
        GestureMode::Zoom if event.delta_y.abs() > tuning.noise_threshold => {
            zoom_factor = if event.delta_y > 0.0 {
                1.0 / (1.0 + tuning.zoom_speed)
            } else {
                1.0 + tuning.zoom_speed
            };
        }
        GestureMode::Pan if event.delta_x.abs() > tuning.noise_threshold => {
            pan_fraction = if event.delta_x > 0.0 {
                -tuning.pan_speed
            } else {
                tuning.pan_speed
            };
        }
        _ => {}
    }

    if zoom_factor == 1.0 && pan_fraction == 0.0 {
        return Ok(None);
    }

    // The anchor keeps its on-screen position during a zoom: the new span
    // is split around it in the same proportion it had in the old window.
    let old_span_ms = window.span_millis();
    let anchor_frac = span_millis_f64(anchor - window.start()) / old_span_ms;
    let new_span_ms = old_span_ms * zoom_factor;
    let pan_offset_ms = old_span_ms * pan_fraction;

    let new_start = offset_from(anchor, pan_offset_ms - new_span_ms * anchor_frac)?;
    let new_end = offset_from(anchor, pan_offset_ms + new_span_ms * (1.0 - anchor_frac))?;

    match TimeWindow::new(new_start, new_end) {
        Ok(next) => {
            debug!(?mode, zoom_factor, pan_fraction, "committing wheel gesture");
            Ok(Some(next))
        }
        Err(err) => {
            debug!(error = %err, "rejecting degenerate gesture result");
            Ok(None)
        }
    }
}

fn offset_from(anchor: DateTime<Utc>, offset_ms: f64) -> AxisResult<DateTime<Utc>> {
    if !offset_ms.is_finite() {
        return Err(AxisError::InvalidData(
            "gesture offset must be finite".to_owned(),
        ));
    }

    let delta = TimeDelta::try_milliseconds(offset_ms.round() as i64).ok_or_else(|| {
        AxisError::InvalidData("gesture offset exceeds representable time".to_owned())
    })?;
    anchor
        .checked_add_signed(delta)
        .ok_or_else(|| AxisError::InvalidData("gesture target out of time range".to_owned()))
}
