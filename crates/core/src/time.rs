//! Time-of-day value type with second precision.
//!
//! A [`ClockTime`] carries only hour, minute and second. It is built either
//! through the validated [`ClockTime::new`] constructor or by extracting the
//! clock part of a host timestamp with [`ClockTime::from_host`]. Dates,
//! sub-second precision and time zones are never part of the value.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, TimeField};

const SECONDS_PER_DAY: i64 = 86_400;

/// A 24-hour time of day, `HH:MM:SS`.
///
/// Fields are always in range: hour in `0..=23`, minute and second in
/// `0..=59`. Ordering is chronological within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0, second: 0 };

    /// Build a time of day, checking hour, then minute, then second.
    ///
    /// Fails on the first field outside its range.
    pub fn new(hour: i64, minute: i64, second: i64) -> Result<Self, ClockError> {
        Ok(Self {
            hour: check(TimeField::Hour, hour)?,
            minute: check(TimeField::Minute, minute)?,
            second: check(TimeField::Second, second)?,
        })
    }

    /// Extract hour, minute and second from a host timestamp.
    ///
    /// Accepts anything with chrono clock accessors (`DateTime<Tz>`,
    /// `NaiveDateTime`, `NaiveTime`). Chrono reports a leap second as `:59`
    /// with nanoseconds past one billion, so it maps to `:59` here too.
    pub fn from_host<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }

    /// Current time of day in the host's local time zone.
    pub fn now_local() -> Self {
        Self::from_host(&Local::now())
    }

    /// Current time of day in UTC.
    pub fn now_utc() -> Self {
        Self::from_host(&Utc::now())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// True iff hour, minute and second of `t` all equal this time.
    pub fn matches<T: Timelike>(&self, t: &T) -> bool {
        self.hour == t.hour() && self.minute == t.minute() && self.second == t.second()
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour * 3_600 + self.minute * 60 + self.second
    }

    /// Shift by a signed number of seconds, wrapping around midnight.
    pub fn offset_seconds(&self, delta: i64) -> Self {
        let shift = delta.rem_euclid(SECONDS_PER_DAY);
        let total = (i64::from(self.seconds_from_midnight()) + shift) % SECONDS_PER_DAY;
        // `total` is in 0..86_400, so every field fits.
        Self {
            hour: (total / 3_600) as u32,
            minute: (total % 3_600 / 60) as u32,
            second: (total % 60) as u32,
        }
    }
}

fn check(field: TimeField, value: i64) -> Result<u32, ClockError> {
    if (0..=field.max()).contains(&value) {
        Ok(value as u32)
    } else {
        Err(ClockError::InvalidRange { field, value })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Parses `HH:MM:SS` or `HH:MM` (seconds default to zero).
impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(ClockError::Malformed(trimmed.to_string()));
        }

        let mut fields = [0i64; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ClockError::Malformed(trimmed.to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| ClockError::Malformed(trimmed.to_string()))?;
        }

        Self::new(fields[0], fields[1], fields[2])
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(t: ClockTime) -> Self {
        // Fields are range-checked at construction.
        NaiveTime::from_hms_opt(t.hour, t.minute, t.second).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
