use chrono::{DateTime, TimeZone, Utc};
use timeaxis::core::TimeUnit;

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid utc timestamp")
}

#[test]
fn century_label_uses_literal_floor_of_year() {
    // Year 1000 is labeled "10th Century", not the ordinal-corrected 11th.
    assert_eq!(
        TimeUnit::Century.format_label(utc(1000, 1, 1, 0, 0, 0)),
        "10th Century"
    );
    assert_eq!(
        TimeUnit::Century.format_label(utc(1999, 6, 15, 0, 0, 0)),
        "19th Century"
    );
}

#[test]
fn century_label_floors_negative_years_toward_earlier_centuries() {
    assert_eq!(
        TimeUnit::Century.format_label(utc(-44, 3, 15, 0, 0, 0)),
        "-1th Century"
    );
}

#[test]
fn year_label_renders_bc_for_negative_years() {
    assert_eq!(TimeUnit::Year.format_label(utc(-44, 3, 15, 0, 0, 0)), "44 BC");
    assert_eq!(TimeUnit::Year.format_label(utc(2024, 7, 1, 0, 0, 0)), "2024");
}

#[test]
fn sub_day_labels_use_fixed_clock_formats() {
    let t = utc(2024, 1, 2, 13, 5, 45);
    assert_eq!(TimeUnit::Hour.format_label(t), "13:05");
    assert_eq!(TimeUnit::Minute.format_label(t), "05:45");
    assert_eq!(TimeUnit::Second.format_label(t), "45");
}

#[test]
fn month_and_day_labels_are_compact() {
    let t = utc(2024, 1, 7, 0, 0, 0);
    assert_eq!(TimeUnit::Month.format_label(t), "Jan");
    assert_eq!(TimeUnit::Day.format_label(t), "7");
}

#[test]
fn truncation_snaps_to_unit_boundaries() {
    let t = utc(1987, 11, 23, 14, 37, 52);

    assert_eq!(
        TimeUnit::Second.start_of(t).expect("truncate second"),
        utc(1987, 11, 23, 14, 37, 52)
    );
    assert_eq!(
        TimeUnit::Minute.start_of(t).expect("truncate minute"),
        utc(1987, 11, 23, 14, 37, 0)
    );
    assert_eq!(
        TimeUnit::Hour.start_of(t).expect("truncate hour"),
        utc(1987, 11, 23, 14, 0, 0)
    );
    assert_eq!(
        TimeUnit::Day.start_of(t).expect("truncate day"),
        utc(1987, 11, 23, 0, 0, 0)
    );
    assert_eq!(
        TimeUnit::Month.start_of(t).expect("truncate month"),
        utc(1987, 11, 1, 0, 0, 0)
    );
    assert_eq!(
        TimeUnit::Year.start_of(t).expect("truncate year"),
        utc(1987, 1, 1, 0, 0, 0)
    );
    assert_eq!(
        TimeUnit::Century.start_of(t).expect("truncate century"),
        utc(1900, 1, 1, 0, 0, 0)
    );
}

#[test]
fn century_truncation_floors_negative_years() {
    let t = utc(-44, 3, 15, 12, 0, 0);
    assert_eq!(
        TimeUnit::Century.start_of(t).expect("truncate century"),
        utc(-100, 1, 1, 0, 0, 0)
    );
}

#[test]
fn advance_steps_one_calendar_unit() {
    let start = utc(2000, 1, 1, 0, 0, 0);

    assert_eq!(
        TimeUnit::Second.advance(start).expect("advance second"),
        utc(2000, 1, 1, 0, 0, 1)
    );
    assert_eq!(
        TimeUnit::Month.advance(start).expect("advance month"),
        utc(2000, 2, 1, 0, 0, 0)
    );
    assert_eq!(
        TimeUnit::Year.advance(start).expect("advance year"),
        utc(2001, 1, 1, 0, 0, 0)
    );
    assert_eq!(
        TimeUnit::Century.advance(start).expect("advance century"),
        utc(2100, 1, 1, 0, 0, 0)
    );
}

#[test]
fn year_advance_respects_leap_february() {
    let leap_day = utc(2000, 2, 29, 0, 0, 0);
    assert_eq!(
        TimeUnit::Year.advance(leap_day).expect("advance year"),
        utc(2001, 2, 28, 0, 0, 0)
    );
}
