use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;
use timeaxis::core::{AxisMapper, Rect, TimeWindow, select_units};
use timeaxis::interaction::{GestureState, GestureTuning, WheelEvent, apply_wheel};

fn window_from(start_ms: i64, span_ms: i64) -> TimeWindow {
    let start = DateTime::<Utc>::from_timestamp_millis(start_ms).expect("valid start");
    let end = start + TimeDelta::milliseconds(span_ms);
    TimeWindow::new(start, end).expect("valid window")
}

proptest! {
    #[test]
    fn mapper_round_trip_property(
        start_ms in -2_000_000_000_000i64..2_000_000_000_000,
        span_ms in 1_000i64..1_000_000_000_000,
        frac in 0.0f64..0.999
    ) {
        let window = window_from(start_ms, span_ms);
        let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
        let mapper = AxisMapper::new(window, rect).expect("valid mapper");

        let t = window.start() + TimeDelta::milliseconds((frac * span_ms as f64) as i64);
        let px = mapper.time_to_x(t);
        let recovered = mapper.x_to_time(px).expect("pixel inside rect");

        prop_assert!((recovered - t).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn zoom_anchor_stays_put_property(
        start_ms in -2_000_000_000_000i64..2_000_000_000_000,
        span_ms in 10_000_000i64..1_000_000_000_000,
        cursor_frac in 0.01f64..0.99,
        scroll_down in proptest::bool::ANY
    ) {
        let window = window_from(start_ms, span_ms);
        let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
        let cursor_px = rect.x + cursor_frac * rect.width;

        let mapper = AxisMapper::new(window, rect).expect("valid mapper");
        let anchor = mapper.x_to_time(cursor_px).expect("anchor time");

        let delta_y = if scroll_down { 3.0 } else { -3.0 };
        let mut state = GestureState::default();
        let next = apply_wheel(
            window,
            rect,
            GestureTuning::default(),
            &mut state,
            WheelEvent::new(0.0, delta_y, cursor_px),
            Utc::now(),
        )
        .expect("apply wheel")
        .expect("zoom commits");

        let mapper_after = AxisMapper::new(next, rect).expect("mapper after");
        prop_assert!((mapper_after.time_to_x(anchor) - cursor_px).abs() <= 1e-3);
    }

    #[test]
    fn pan_preserves_span_property(
        start_ms in -2_000_000_000_000i64..2_000_000_000_000,
        span_ms in 10_000_000i64..1_000_000_000_000,
        cursor_frac in 0.0f64..1.0,
        scroll_right in proptest::bool::ANY
    ) {
        let window = window_from(start_ms, span_ms);
        let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
        let cursor_px = rect.x + cursor_frac * rect.width;

        let delta_x = if scroll_right { 4.0 } else { -4.0 };
        let mut state = GestureState::default();
        let next = apply_wheel(
            window,
            rect,
            GestureTuning::default(),
            &mut state,
            WheelEvent::new(delta_x, 0.0, cursor_px),
            Utc::now(),
        )
        .expect("apply wheel")
        .expect("pan commits");

        prop_assert!((next.span_millis() - window.span_millis()).abs() <= 2.0);
    }

    #[test]
    fn selector_is_total_for_positive_spans(
        span_ms in 1i64..5_000_000_000_000_000
    ) {
        let window = window_from(0, span_ms);
        let units = select_units(window);
        prop_assert!(!units.is_empty());
        prop_assert!(units.len() <= 2);
    }
}
