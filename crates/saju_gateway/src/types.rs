//! Request and result types shared by every gateway implementation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_time::{CalendarDate, TimeError};
use serde::Serialize;

use crate::error::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionDirection {
    LunarToSolar,
    SolarToLunar,
}

/// A date in the Korean lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Intercalary (윤달) month.
    pub leap_month: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u32, day: u32, leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap_month,
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap_month {
            f.write_str(" (윤)")?;
        }
        Ok(())
    }
}

impl FromStr for LunarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` as a non-leap lunar date. Fields are not checked
    /// against month lengths, which only the conversion service knows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year = y
            .parse::<i32>()
            .map_err(|e| TimeError::Parse(format!("year '{y}': {e}")))?;
        let month = m
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("month '{m}': {e}")))?;
        let day = d
            .parse::<u32>()
            .map_err(|e| TimeError::Parse(format!("day '{d}': {e}")))?;
        Ok(Self::new(year, month, day, false))
    }
}

/// One conversion request. `leap_month` is only meaningful for
/// [`ConversionDirection::LunarToSolar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConversionRequest {
    pub direction: ConversionDirection,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
}

impl ConversionRequest {
    pub const fn lunar_to_solar(date: LunarDate) -> Self {
        Self {
            direction: ConversionDirection::LunarToSolar,
            year: date.year,
            month: date.month,
            day: date.day,
            leap_month: date.leap_month,
        }
    }

    pub const fn solar_to_lunar(date: CalendarDate) -> Self {
        Self {
            direction: ConversionDirection::SolarToLunar,
            year: date.year,
            month: date.month,
            day: date.day,
            leap_month: false,
        }
    }
}

/// Converted date plus the sexagenary names the service reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub direction: ConversionDirection,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Set when the converted date is in an intercalary lunar month.
    pub leap_month: bool,
    pub sexagenary_year: Option<String>,
    pub sexagenary_month: Option<String>,
    pub sexagenary_day: Option<String>,
}

impl ConversionResult {
    /// The converted date as a validated Gregorian date.
    pub fn solar_date(&self) -> Result<CalendarDate, GatewayError> {
        if self.direction != ConversionDirection::LunarToSolar {
            return Err(GatewayError::Parse(
                "result of a solar-to-lunar request is not a solar date".to_string(),
            ));
        }
        CalendarDate::new(self.year, self.month, self.day)
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }

    pub fn lunar_date(&self) -> Result<LunarDate, GatewayError> {
        if self.direction != ConversionDirection::SolarToLunar {
            return Err(GatewayError::Parse(
                "result of a lunar-to-solar request is not a lunar date".to_string(),
            ));
        }
        Ok(LunarDate::new(self.year, self.month, self.day, self.leap_month))
    }
}
