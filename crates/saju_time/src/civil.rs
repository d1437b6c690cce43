//! Gregorian calendar dates and wall-clock civil times.
//!
//! [`CalendarDate`] is a validated proleptic Gregorian date. Day arithmetic
//! goes through the integer Julian Day Number so month lengths and leap
//! years never need special casing by callers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{gregorian_to_jdn, jdn_to_gregorian};

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Earliest supported birth date.
pub const SUPPORTED_MIN: CalendarDate = CalendarDate {
    year: 1900,
    month: 1,
    day: 1,
};

/// Latest supported birth date.
pub const SUPPORTED_MAX: CalendarDate = CalendarDate {
    year: 2100,
    month: 12,
    day: 31,
};

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A Gregorian calendar date.
///
/// Field order gives the derived `Ord` the usual (year, month, day)
/// lexicographic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Validate and build a date. Any Gregorian year is accepted; see
    /// [`CalendarDate::new_supported`] for the birth-date range check.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Validate and additionally require the date to lie in 1900..=2100.
    pub fn new_supported(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self::new(year, month, day)?;
        date.ensure_supported()?;
        Ok(date)
    }

    /// Error unless the date is within [`SUPPORTED_MIN`]..=[`SUPPORTED_MAX`].
    pub fn ensure_supported(self) -> Result<Self, TimeError> {
        if self < SUPPORTED_MIN || self > SUPPORTED_MAX {
            return Err(TimeError::OutOfRange {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(self)
    }

    /// Build from an integer Julian Day Number.
    pub const fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self { year, month, day }
    }

    /// Integer Julian Day Number of this date.
    pub const fn jdn(self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(self, earlier: CalendarDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// Date `n` days later (negative `n` goes back).
    pub const fn add_days(self, n: i64) -> Self {
        Self::from_jdn(self.jdn() + n)
    }

    /// The following day, rolling month and year over as needed.
    pub const fn next_day(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// The preceding day, rolling month and year back as needed.
    pub const fn prev_day(self) -> Self {
        if self.day > 1 {
            Self {
                day: self.day - 1,
                ..self
            }
        } else if self.month > 1 {
            Self {
                year: self.year,
                month: self.month - 1,
                day: days_in_month(self.year, self.month - 1),
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
                day: 31,
            }
        }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year = parts[0]
            .parse::<i32>()
            .map_err(|e| TimeError::Parse(format!("year '{}': {e}", parts[0])))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("month '{}': {e}", parts[1])))?;
        let day = parts[2]
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("day '{}': {e}", parts[2])))?;
        Self::new(year, month, day)
    }
}

/// Wall-clock birth time, before any longitude correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Minutes since midnight, 0..1440.
    pub const fn minutes_of_day(self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Inverse of [`CivilTime::minutes_of_day`]; `minutes` must be in 0..1440.
    pub fn from_minutes_of_day(minutes: i64) -> Result<Self, TimeError> {
        if !(0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(TimeError::Parse(format!(
                "minute of day {minutes} outside 0..1440"
            )));
        }
        Ok(Self {
            hour: (minutes / 60) as u32,
            minute: (minutes % 60) as u32,
        })
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::Parse(format!("expected HH:MM, got '{s}'")))?;
        let hour = h
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("hour '{h}': {e}")))?;
        let minute = m
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("minute '{m}': {e}")))?;
        Self::new(hour, minute)
    }
}
