use std::fmt;

use chrono::{DateTime, Datelike, Months, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Tick granularity of the axis, ordered from finest to coarsest.
///
/// The enum is closed: every variant has a truncation rule, a step and a
/// label format, so a request to format an unknown unit is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
    Century,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::Century => "century",
        };
        f.write_str(name)
    }
}

impl TimeUnit {
    /// Truncates `t` to the start of this unit.
    ///
    /// Century truncation uses floor division of the astronomical year, so
    /// negative years truncate toward earlier centuries.
    pub fn start_of(self, t: DateTime<Utc>) -> AxisResult<DateTime<Utc>> {
        use chrono::Timelike;

        let (year, month, day) = (t.year(), t.month(), t.day());
        let (hour, minute, second) = (t.hour(), t.minute(), t.second());

        let truncated = match self {
            Self::Second => Utc.with_ymd_and_hms(year, month, day, hour, minute, second),
            Self::Minute => Utc.with_ymd_and_hms(year, month, day, hour, minute, 0),
            Self::Hour => Utc.with_ymd_and_hms(year, month, day, hour, 0, 0),
            Self::Day => Utc.with_ymd_and_hms(year, month, day, 0, 0, 0),
            Self::Month => Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0),
            Self::Year => Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0),
            Self::Century => Utc.with_ymd_and_hms(year.div_euclid(100) * 100, 1, 1, 0, 0, 0),
        };

        truncated.single().ok_or_else(|| {
            AxisError::InvalidData(format!("cannot truncate {t} to start of {self}"))
        })
    }

    /// Advances `t` by one calendar unit of this granularity.
    pub fn advance(self, t: DateTime<Utc>) -> AxisResult<DateTime<Utc>> {
        let stepped = match self {
            Self::Second => t.checked_add_signed(TimeDelta::seconds(1)),
            Self::Minute => t.checked_add_signed(TimeDelta::minutes(1)),
            Self::Hour => t.checked_add_signed(TimeDelta::hours(1)),
            Self::Day => t.checked_add_signed(TimeDelta::days(1)),
            Self::Month => t.checked_add_months(Months::new(1)),
            Self::Year => t.checked_add_months(Months::new(12)),
            Self::Century => t.checked_add_months(Months::new(1200)),
        };

        stepped.ok_or_else(|| {
            AxisError::InvalidData(format!("time out of range stepping {t} by one {self}"))
        })
    }

    /// Formats the notch label for an instant at this granularity.
    ///
    /// The century label is the literal `floor(year / 100)` with a "th
    /// Century" suffix and no ordinal correction: year 1000 formats as
    /// "10th Century".
    #[must_use]
    pub fn format_label(self, t: DateTime<Utc>) -> String {
        match self {
            Self::Century => format!("{}th Century", t.year().div_euclid(100)),
            Self::Year => {
                let year = t.year();
                if year < 0 {
                    format!("{} BC", -year)
                } else {
                    year.to_string()
                }
            }
            Self::Month => t.format("%b").to_string(),
            Self::Day => t.day().to_string(),
            Self::Hour => t.format("%H:%M").to_string(),
            Self::Minute => t.format("%M:%S").to_string(),
            Self::Second => t.format("%S").to_string(),
        }
    }
}
