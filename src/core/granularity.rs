use smallvec::{SmallVec, smallvec};

use crate::core::{TimeUnit, TimeWindow};

pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
/// Mean Gregorian year (365.2425 days), used to express spans as
/// fractional year counts.
pub const MILLIS_PER_YEAR: f64 = 365.2425 * MILLIS_PER_DAY;

/// Units rendered for a visible window, primary unit first.
pub type UnitSelection = SmallVec<[TimeUnit; 2]>;

/// Picks the tick granularity for a window span.
///
/// Thresholds are evaluated in order; the `>` / `>=` asymmetry decides
/// which unit wins at the round boundaries (100 years exactly still shows
/// centuries, 7 days exactly already drops to hours) and must be kept.
#[must_use]
pub fn select_units(window: TimeWindow) -> UnitSelection {
    let span_ms = window.span_millis();
    let years = span_ms / MILLIS_PER_YEAR;

    if years > 500.0 {
        smallvec![TimeUnit::Century]
    } else if years >= 100.0 {
        smallvec![TimeUnit::Century, TimeUnit::Year]
    } else if years > 20.0 {
        smallvec![TimeUnit::Year]
    } else if years >= 1.0 {
        smallvec![TimeUnit::Year, TimeUnit::Month]
    } else if span_ms / MILLIS_PER_DAY > 7.0 {
        smallvec![TimeUnit::Day, TimeUnit::Hour]
    } else if span_ms / MILLIS_PER_HOUR > 24.0 {
        smallvec![TimeUnit::Hour, TimeUnit::Minute]
    } else if span_ms / MILLIS_PER_MINUTE > 60.0 {
        smallvec![TimeUnit::Minute, TimeUnit::Second]
    } else {
        smallvec![TimeUnit::Second]
    }
}
