use serde::{Deserialize, Serialize};

use crate::core::{Rect, Viewport};
use crate::error::{AxisError, AxisResult};

/// Fixed paddings and axis strip height, in css pixels.
///
/// The host re-queries its viewport and device pixel ratio on every resize
/// and asks for a fresh rect; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub padding_left: f64,
    pub padding_right: f64,
    pub axis_height: f64,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            padding_left: 150.0,
            padding_right: 50.0,
            axis_height: 100.0,
        }
    }
}

impl AxisLayout {
    pub fn validate(self) -> AxisResult<Self> {
        if !self.padding_left.is_finite()
            || !self.padding_right.is_finite()
            || self.padding_left < 0.0
            || self.padding_right < 0.0
        {
            return Err(AxisError::InvalidData(
                "axis paddings must be finite and >= 0".to_owned(),
            ));
        }

        if !self.axis_height.is_finite() || self.axis_height <= 0.0 {
            return Err(AxisError::InvalidData(
                "axis height must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Computes the device-pixel rect the axis is drawn into.
    ///
    /// Fails when the paddings consume the whole scaled viewport width.
    pub fn axis_rect(self, viewport: Viewport, pixel_ratio: f64) -> AxisResult<Rect> {
        if !viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(AxisError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width) * pixel_ratio - self.padding_left - self.padding_right;
        if width <= 0.0 {
            return Err(AxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Rect::new(
            self.padding_left,
            0.0,
            width,
            self.axis_height * pixel_ratio,
        ))
    }
}
