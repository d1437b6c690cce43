//! Error types for calendar dates and civil times.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time construction and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a real Gregorian date.
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Hour or minute component out of range.
    InvalidTime { hour: u32, minute: u32 },
    /// Date is valid but outside the supported 1900..=2100 range.
    OutOfRange { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as a date or time.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
            Self::OutOfRange { year, month, day } => write!(
                f,
                "date {year:04}-{month:02}-{day:02} outside supported range 1900-01-01..2100-12-31"
            ),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
