//! Calendar primitives for the birth-chart engine.
//!
//! This crate provides:
//! - [`CalendarDate`]: validated Gregorian dates with day arithmetic
//! - [`CivilTime`]: wall-clock hour/minute
//! - Julian Date / Julian Day Number conversions

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{
    CalendarDate, CivilTime, MINUTES_PER_DAY, SUPPORTED_MAX, SUPPORTED_MIN, days_in_month,
    is_leap_year,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, gregorian_to_jdn, jd_to_centuries,
    jdn_to_gregorian,
};
