//! Solar-term boundary search and solar-month classification.
//!
//! Boundaries are located on whole dates only: the Sun's longitude is
//! sampled at noon for each day of a 40-day window and the day closest to
//! the target longitude wins. That is coarse but sufficient, because the
//! boundaries are only used to put whole dates into month buckets.

use saju_time::{CalendarDate, gregorian_to_jdn};

use crate::error::SolarError;
use crate::position::solar_longitude_at_noon;
use crate::solar_term::{ALL_SOLAR_TERMS, SOLAR_TERM_LONGITUDES, SolarTerm};
use crate::util::{angular_distance, normalize_360};

/// Days sampled before the first day of the estimated month.
pub const SEARCH_DAYS_BEFORE: i64 = 5;

/// Total number of days sampled by [`boundary_date`].
pub const SEARCH_WINDOW_DAYS: i64 = 40;

/// No solar month is longer than this many days.
pub const MAX_SOLAR_MONTH_DAYS: u32 = 40;

const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// First day of the calendar month in which the Sun is expected to reach
/// `target_deg` during `year`, assuming uniform motion from the March
/// equinox. Targets reached after December wrap into January..March.
fn estimated_month_start(year: i32, target_deg: f64) -> CalendarDate {
    let equinox = gregorian_to_jdn(year, 3, 20);
    let offset = (normalize_360(target_deg) / 360.0 * TROPICAL_YEAR_DAYS).round() as i64;
    let mut estimate = equinox + offset;
    if estimate > gregorian_to_jdn(year, 12, 31) {
        estimate -= TROPICAL_YEAR_DAYS.round() as i64;
    }
    let est = CalendarDate::from_jdn(estimate);
    CalendarDate {
        year: est.year,
        month: est.month,
        day: 1,
    }
}

/// Date in calendar year `year` whose noon solar longitude is closest to
/// `target_deg`.
///
/// Samples [`SEARCH_WINDOW_DAYS`] consecutive days starting
/// [`SEARCH_DAYS_BEFORE`] days before the estimated month and keeps the
/// first minimum of the circular angular distance.
pub fn boundary_date(year: i32, target_deg: f64) -> CalendarDate {
    let start = estimated_month_start(year, target_deg).add_days(-SEARCH_DAYS_BEFORE);
    let mut best = start;
    let mut best_diff = f64::INFINITY;
    let mut day = start;
    for _ in 0..SEARCH_WINDOW_DAYS {
        let diff = angular_distance(solar_longitude_at_noon(day), target_deg);
        if diff < best_diff {
            best_diff = diff;
            best = day;
        }
        day = day.next_day();
    }
    best
}

/// Boundary dates of all 12 sectional terms falling in calendar year `year`,
/// in month order (입춘 first, 소한 last even though 소한 falls in January).
pub fn term_boundaries(year: i32) -> [(SolarTerm, CalendarDate); 12] {
    ALL_SOLAR_TERMS.map(|term| (term, boundary_date(year, term.longitude_deg())))
}

/// Solar month (1..=12) for an ecliptic longitude.
///
/// Month `i` spans `[L[i-1], L[i])`. The interval starting at 345 deg wraps
/// through 0 deg and is matched as `lon >= start || lon < end`.
pub fn classify_longitude(longitude_deg: f64) -> Result<u8, SolarError> {
    for i in 0..12 {
        let start = SOLAR_TERM_LONGITUDES[i];
        let end = SOLAR_TERM_LONGITUDES[(i + 1) % 12];
        let inside = if start < end {
            start <= longitude_deg && longitude_deg < end
        } else {
            longitude_deg >= start || longitude_deg < end
        };
        if inside {
            return Ok(i as u8 + 1);
        }
    }
    Err(SolarError::Unclassified { longitude_deg })
}

/// Solar month (1..=12, 1 = the month opened by 입춘) containing `date`.
pub fn classify(date: CalendarDate) -> Result<u8, SolarError> {
    classify_longitude(solar_longitude_at_noon(date))
}

/// Whole days from `date` to the first date of the next solar month.
pub fn days_to_next_boundary(date: CalendarDate) -> Result<u32, SolarError> {
    let month = classify(date)?;
    let mut day = date;
    for n in 1..=MAX_SOLAR_MONTH_DAYS {
        day = day.next_day();
        if classify(day)? != month {
            return Ok(n);
        }
    }
    Err(SolarError::NoBoundaryWithin {
        days: MAX_SOLAR_MONTH_DAYS,
    })
}

/// Whole days from the first date of `date`'s solar month to `date`
/// (0 when `date` itself opens the month).
pub fn days_since_boundary(date: CalendarDate) -> Result<u32, SolarError> {
    let month = classify(date)?;
    let mut day = date;
    for n in 0..MAX_SOLAR_MONTH_DAYS {
        let prev = day.prev_day();
        if classify(prev)? != month {
            return Ok(n);
        }
        day = prev;
    }
    Err(SolarError::NoBoundaryWithin {
        days: MAX_SOLAR_MONTH_DAYS,
    })
}
