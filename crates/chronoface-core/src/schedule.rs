//! Refresh timing for the watchface.
//!
//! The core owns no timer. A shell that redraws the face uses
//! [`until_next_tick`] to sleep until the next boundary and then takes
//! a fresh snapshot.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// How often the face is redrawn.
///
/// Config files and the CLI share [`Granularity::parse`], so both accept
/// the same names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Granularity {
    /// On every minute boundary. Matches what the face displays.
    #[default]
    Minute,
    /// On every second boundary.
    Second,
}

impl Granularity {
    /// Length of one refresh period.
    pub fn period(self) -> Duration {
        match self {
            Self::Minute => Duration::from_secs(60),
            Self::Second => Duration::from_secs(1),
        }
    }

    /// Parses a granularity name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minute" | "min" | "m" => Some(Self::Minute),
            "second" | "sec" | "s" => Some(Self::Second),
            _ => None,
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
            .ok_or_else(|| format!("unknown granularity {name:?} (expected \"minute\" or \"second\")"))
    }
}

/// Returns how long to wait from `now` until the next boundary.
///
/// Never zero: an instant exactly on a boundary waits one full period.
/// Leap-second instants (nanosecond field >= 1e9) count as the last
/// nanosecond of their second.
pub fn until_next_tick<Tz: TimeZone>(now: &DateTime<Tz>, granularity: Granularity) -> Duration {
    let nanos = u64::from(now.nanosecond().min(999_999_999));
    let into_period = match granularity {
        Granularity::Minute => u64::from(now.second()) * 1_000_000_000 + nanos,
        Granularity::Second => nanos,
    };
    let period = granularity.period();
    period - Duration::from_nanos(into_period)
}
