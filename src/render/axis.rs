use tracing::debug;

use crate::core::{AxisMapper, Rect, TimeWindow, Viewport, select_units};
use crate::error::{AxisError, AxisResult};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Visual tuning for the axis strip.
///
/// Defaults match the reference configuration: a 2px black baseline,
/// 20px/10px notches and 14px labels 40px below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub baseline_width: f64,
    pub baseline_color: Color,
    pub notch_width: f64,
    pub notch_height_primary: f64,
    pub notch_height_secondary: f64,
    pub label_offset: f64,
    pub label_font_size: f64,
    pub label_color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            baseline_width: 2.0,
            baseline_color: Color::BLACK,
            notch_width: 2.0,
            notch_height_primary: 20.0,
            notch_height_secondary: 10.0,
            label_offset: 40.0,
            label_font_size: 14.0,
            label_color: Color::BLACK,
        }
    }
}

impl AxisStyle {
    pub fn validate(self) -> AxisResult<Self> {
        for (field, value) in [
            ("baseline_width", self.baseline_width),
            ("notch_width", self.notch_width),
            ("notch_height_primary", self.notch_height_primary),
            ("notch_height_secondary", self.notch_height_secondary),
            ("label_font_size", self.label_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AxisError::InvalidData(format!(
                    "axis style `{field}` must be finite and > 0"
                )));
            }
        }

        if !self.label_offset.is_finite() {
            return Err(AxisError::InvalidData(
                "axis style `label_offset` must be finite".to_owned(),
            ));
        }

        self.baseline_color.validate()?;
        self.label_color.validate()?;
        Ok(self)
    }
}

/// Materializes the axis scene for one draw pass.
///
/// Pure with respect to the session: the caller owns triggering the actual
/// backend draw, keeping "compute window" and "render window" as separate
/// pipeline steps.
///
/// Per selected unit the sweep starts at `window.start` truncated to that
/// unit boundary, so the first notch may map slightly left of the rect;
/// backends clip it. Labels are attached to primary-unit notches only.
pub fn build_axis_frame(
    window: TimeWindow,
    rect: Rect,
    style: AxisStyle,
    viewport: Viewport,
) -> AxisResult<RenderFrame> {
    let style = style.validate()?;
    let mapper = AxisMapper::new(window, rect)?;
    let units = select_units(window);
    debug!(?units, span_ms = window.span_millis(), "building axis frame");

    let baseline_y = rect.y + rect.height / 2.0;
    let mut frame = RenderFrame::new(viewport).with_line(LinePrimitive::new(
        rect.x,
        baseline_y,
        rect.x + rect.width,
        baseline_y,
        style.baseline_width,
        style.baseline_color,
    ));

    for (index, unit) in units.iter().copied().enumerate() {
        let primary = index == 0;
        let notch_height = if primary {
            style.notch_height_primary
        } else {
            style.notch_height_secondary
        };

        let mut cursor = unit.start_of(window.start())?;
        while cursor <= window.end() {
            let x = mapper.time_to_x(cursor);
            frame.lines.push(LinePrimitive::new(
                x,
                baseline_y,
                x,
                baseline_y + notch_height,
                style.notch_width,
                style.baseline_color,
            ));

            if primary {
                frame.texts.push(TextPrimitive::new(
                    unit.format_label(cursor),
                    x,
                    baseline_y + style.label_offset,
                    style.label_font_size,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }

            cursor = unit.advance(cursor)?;
        }
    }

    Ok(frame)
}
