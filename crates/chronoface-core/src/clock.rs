//! Watchface text: local weekday, time and date plus a fixed-offset
//! foreign time.
//!
//! Everything here is pure. [`format_clock`] takes one sampled instant
//! and derives all four strings from it, so the fields can never
//! disagree (e.g. the date advancing between the weekday read and the
//! date read just before midnight).

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Default foreign offset in whole hours (UTC+8).
pub const DEFAULT_OFFSET_HOURS: i32 = 8;

/// Weekday tokens indexed by days since Sunday.
pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Decoration placed before and after the foreign time.
pub const FOREIGN_FRAME: (&str, &str) = ("- ", " -");

/// The four strings shown on the watchface for one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedClock {
    weekday: String,
    local_time: String,
    local_date: String,
    foreign_time: String,
}

impl FormattedClock {
    /// Three-letter uppercase weekday of the local civil day (e.g. `"MON"`).
    pub fn weekday(&self) -> &str {
        &self.weekday
    }

    /// Local time as `HH:MM`, 24-hour.
    pub fn local_time(&self) -> &str {
        &self.local_time
    }

    /// Local date as `MM/DD`.
    pub fn local_date(&self) -> &str {
        &self.local_date
    }

    /// Foreign time as `- HH:MM -`, 24-hour.
    pub fn foreign_time(&self) -> &str {
        &self.foreign_time
    }

    /// All four lines in display order, top to bottom.
    pub fn lines(&self) -> [&str; 4] {
        [
            &self.weekday,
            &self.local_time,
            &self.local_date,
            &self.foreign_time,
        ]
    }
}

/// Formats `now` into the four watchface strings.
///
/// The zone of `now` is the observer's local civil frame. The foreign
/// time is UTC shifted by `offset_hours`; any integer offset is accepted
/// and normalised into `[0, 23]`. Minutes are taken from UTC unchanged,
/// since offsets are whole hours.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>, offset_hours: i32) -> FormattedClock {
    let utc = now.with_timezone(&Utc);
    let (start, end) = FOREIGN_FRAME;

    FormattedClock {
        weekday: weekday_token(now.weekday().num_days_from_sunday()).to_string(),
        local_time: format!("{:02}:{:02}", now.hour(), now.minute()),
        local_date: format!("{:02}/{:02}", now.month(), now.day()),
        foreign_time: format!(
            "{start}{:02}:{:02}{end}",
            foreign_hour(utc.hour(), offset_hours),
            utc.minute()
        ),
    }
}

/// Returns the weekday token for `days_from_sunday`, wrapping past Saturday.
pub fn weekday_token(days_from_sunday: u32) -> &'static str {
    WEEKDAYS[(days_from_sunday % 7) as usize]
}

/// Shifts a UTC hour by `offset_hours` and wraps it into `[0, 23]`.
///
/// Computed in `i64` so that `i32::MIN` / `i32::MAX` offsets cannot
/// overflow.
pub fn foreign_hour(utc_hour: u32, offset_hours: i32) -> u32 {
    let shifted = i64::from(utc_hour) + i64::from(offset_hours);
    // rem_euclid(24) is always in 0..24
    shifted.rem_euclid(24) as u32
}
