use chrono::{DateTime, Utc};

use crate::core::{AxisLayout, Rect, TimeWindow, Viewport};
use crate::error::AxisResult;
use crate::interaction::{self, GestureMode, GestureState, GestureTuning, WheelEvent};
use crate::render::{AxisStyle, RenderFrame, Renderer, build_axis_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisEngineConfig {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub layout: AxisLayout,
    pub style: AxisStyle,
    pub tuning: GestureTuning,
}

impl AxisEngineConfig {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            layout: AxisLayout::default(),
            style: AxisStyle::default(),
            tuning: GestureTuning::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: AxisLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: GestureTuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `AxisEngine` owns one interactive session: the visible time window and
/// the transient gesture mode lock. Geometry stays host-owned and is
/// supplied fresh on every call, so a resize needs no engine-side state
/// beyond asking for a new rect.
#[derive(Debug)]
pub struct AxisEngine<R: Renderer> {
    renderer: R,
    window: TimeWindow,
    gesture: GestureState,
    layout: AxisLayout,
    style: AxisStyle,
    tuning: GestureTuning,
}

impl<R: Renderer> AxisEngine<R> {
    pub fn new(renderer: R, config: AxisEngineConfig) -> AxisResult<Self> {
        let window = TimeWindow::new(config.start, config.end)?;
        let layout = config.layout.validate()?;
        let style = config.style.validate()?;
        let tuning = config.tuning.validate()?;

        Ok(Self {
            renderer,
            window,
            gesture: GestureState::default(),
            layout,
            style,
            tuning,
        })
    }

    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Replaces the visible window, enforcing the `start < end` invariant.
    pub fn set_window(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> AxisResult<()> {
        self.window = TimeWindow::new(start, end)?;
        Ok(())
    }

    /// Last decided gesture mode, if any wheel event has been processed.
    #[must_use]
    pub fn gesture_mode(&self) -> Option<GestureMode> {
        self.gesture.mode()
    }

    #[must_use]
    pub fn layout(&self) -> AxisLayout {
        self.layout
    }

    #[must_use]
    pub fn style(&self) -> AxisStyle {
        self.style
    }

    #[must_use]
    pub fn tuning(&self) -> GestureTuning {
        self.tuning
    }

    /// Computes the axis rect for the host's current geometry.
    pub fn axis_rect(&self, viewport: Viewport, pixel_ratio: f64) -> AxisResult<Rect> {
        self.layout.axis_rect(viewport, pixel_ratio)
    }

    /// Feeds one wheel event through the gesture controller.
    ///
    /// Returns `true` when a new window was committed and the host should
    /// redraw; `false` when the event was ignored.
    pub fn on_wheel(&mut self, event: WheelEvent, rect: Rect, now: DateTime<Utc>) -> AxisResult<bool> {
        let next = interaction::apply_wheel(
            self.window,
            rect,
            self.tuning,
            &mut self.gesture,
            event,
            now,
        )?;

        match next {
            Some(window) => {
                self.window = window;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Materializes the axis scene without touching the renderer.
    pub fn build_render_frame(&self, viewport: Viewport, rect: Rect) -> AxisResult<RenderFrame> {
        build_axis_frame(self.window, rect, self.style, viewport)
    }

    /// Builds the frame for the current window and draws it.
    pub fn render(&mut self, viewport: Viewport, pixel_ratio: f64) -> AxisResult<()> {
        let rect = self.layout.axis_rect(viewport, pixel_ratio)?;
        let frame = build_axis_frame(self.window, rect, self.style, viewport)?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        viewport: Viewport,
        pixel_ratio: f64,
    ) -> AxisResult<()>
    where
        R: CairoContextRenderer,
    {
        let rect = self.layout.axis_rect(viewport, pixel_ratio)?;
        let frame = build_axis_frame(self.window, rect, self.style, viewport)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
