//! Where "now" comes from.
//!
//! The formatter never reads the system clock itself. Callers hand it a
//! [`TimeSource`], which keeps the watchface testable with frozen
//! instants.

use chrono::{DateTime, Local, TimeZone};

use crate::clock::{self, FormattedClock};

/// A provider of the current instant in some local civil zone.
pub trait TimeSource {
    /// The zone used as the observer's local time.
    type Zone: TimeZone;

    /// Returns the current instant.
    fn now(&self) -> DateTime<Self::Zone>;
}

/// The host's wall clock in the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl<Tz: TimeZone> TimeSource for FixedClock<Tz> {
    type Zone = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.instant.clone()
    }
}

/// Samples `source` once and formats the result.
pub fn snapshot<S: TimeSource>(source: &S, offset_hours: i32) -> FormattedClock {
    let now = source.now();
    clock::format_clock(&now, offset_hours)
}
