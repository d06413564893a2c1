use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use timeaxis::AxisError;
use timeaxis::core::{AxisMapper, Rect, TimeWindow};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid utc timestamp")
}

fn two_year_window() -> TimeWindow {
    TimeWindow::new(utc(1000, 1, 1), utc(1002, 1, 1)).expect("valid window")
}

#[test]
fn window_endpoints_map_to_rect_edges() {
    let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
    let mapper = AxisMapper::new(two_year_window(), rect).expect("valid mapper");

    assert_abs_diff_eq!(mapper.time_to_x(utc(1000, 1, 1)), 150.0);
    assert_abs_diff_eq!(mapper.time_to_x(utc(1002, 1, 1)), 1150.0);

    let mid = utc(1001, 1, 1);
    assert_abs_diff_eq!(mapper.time_to_x(mid), 650.0, epsilon = 1e-9);
}

#[test]
fn round_trip_reproduces_interior_instants() {
    let window = two_year_window();
    let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
    let mapper = AxisMapper::new(window, rect).expect("valid mapper");

    let t = window.start() + TimeDelta::milliseconds(11_059_200_123);
    let px = mapper.time_to_x(t);
    let recovered = mapper.x_to_time(px).expect("pixel inside rect");

    let drift = (recovered - t).num_milliseconds().abs();
    assert!(drift <= 1, "round trip drifted {drift} ms");
}

#[test]
fn instants_outside_window_map_outside_rect() {
    let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
    let mapper = AxisMapper::new(two_year_window(), rect).expect("valid mapper");

    assert!(mapper.time_to_x(utc(999, 12, 1)) < rect.x);
    assert!(mapper.time_to_x(utc(1002, 2, 1)) > rect.x + rect.width);
}

#[test]
fn out_of_range_pixels_map_to_none() {
    let rect = Rect::new(150.0, 0.0, 1000.0, 100.0);
    let mapper = AxisMapper::new(two_year_window(), rect).expect("valid mapper");

    assert!(mapper.x_to_time(149.9).is_none());
    assert!(mapper.x_to_time(1150.1).is_none());
    assert!(mapper.x_to_time(f64::NAN).is_none());

    assert!(mapper.x_to_time(150.0).is_some());
    assert!(mapper.x_to_time(1150.0).is_some());
}

#[test]
fn zero_width_rect_is_rejected() {
    let rect = Rect::new(150.0, 0.0, 0.0, 100.0);
    let err = AxisMapper::new(two_year_window(), rect).expect_err("zero width must fail");
    assert!(matches!(err, AxisError::InvalidRect { .. }));
}

#[test]
fn degenerate_window_cannot_be_constructed() {
    let t = utc(1000, 1, 1);
    let err = TimeWindow::new(t, t).expect_err("degenerate window must fail");
    assert!(matches!(err, AxisError::DegenerateWindow { .. }));

    let err = TimeWindow::new(utc(1002, 1, 1), utc(1000, 1, 1)).expect_err("inverted window");
    assert!(matches!(err, AxisError::DegenerateWindow { .. }));
}
