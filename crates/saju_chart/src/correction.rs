//! Birth-time correction for the gap between a region's longitude and the
//! reference meridian of the chart tables.
//!
//! The reference meridian is 135°E, except during the two periods when
//! Korean civil time was kept on 127.5°E (1908-04-01..=1911-12-31 and
//! 1954-03-21..=1961-08-09). The offset is 4 minutes of time per degree,
//! rounded to whole minutes, and is added to the civil time with calendar
//! rollover in either direction.

use saju_config::Region;
use saju_time::{CalendarDate, CivilTime, MINUTES_PER_DAY};
use serde::Serialize;

/// Reference meridian outside the special periods, degrees east.
pub const STANDARD_MERIDIAN_DEG: f64 = 135.0;

/// Reference meridian inside the special periods, degrees east.
pub const SPECIAL_MERIDIAN_DEG: f64 = 127.5;

/// Minutes of time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Inclusive date ranges that use [`SPECIAL_MERIDIAN_DEG`].
pub const SPECIAL_PERIODS: [(CalendarDate, CalendarDate); 2] = [
    (
        CalendarDate {
            year: 1908,
            month: 4,
            day: 1,
        },
        CalendarDate {
            year: 1911,
            month: 12,
            day: 31,
        },
    ),
    (
        CalendarDate {
            year: 1954,
            month: 3,
            day: 21,
        },
        CalendarDate {
            year: 1961,
            month: 8,
            day: 9,
        },
    ),
];

/// Whether `date` falls inside one of [`SPECIAL_PERIODS`].
pub fn is_special_period(date: CalendarDate) -> bool {
    SPECIAL_PERIODS
        .iter()
        .any(|(start, end)| *start <= date && date <= *end)
}

/// Reference meridian in effect on `date`.
pub fn reference_meridian(date: CalendarDate) -> f64 {
    if is_special_period(date) {
        SPECIAL_MERIDIAN_DEG
    } else {
        STANDARD_MERIDIAN_DEG
    }
}

/// Signed whole-minute offset for a location at `longitude_deg`.
pub fn offset_minutes(reference_meridian_deg: f64, longitude_deg: f64) -> i64 {
    ((reference_meridian_deg - longitude_deg) * MINUTES_PER_DEGREE).round() as i64
}

/// Move `(date, time)` by `minutes`, rolling the date as often as needed.
pub fn shift_minutes(date: CalendarDate, time: CivilTime, minutes: i64) -> (CalendarDate, CivilTime) {
    let mut date = date;
    let mut total = time.minutes_of_day() + minutes;
    while total < 0 {
        total += MINUTES_PER_DAY;
        date = date.prev_day();
    }
    while total >= MINUTES_PER_DAY {
        total -= MINUTES_PER_DAY;
        date = date.next_day();
    }
    let time = CivilTime {
        hour: (total / 60) as u32,
        minute: (total % 60) as u32,
    };
    (date, time)
}

/// Corrected date/time and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeCorrection {
    pub date: CalendarDate,
    pub time: CivilTime,
    pub reference_meridian_deg: f64,
    pub special_period: bool,
    pub region_longitude_deg: f64,
    pub offset_minutes: i64,
}

impl TimeCorrection {
    /// The uncorrected date and time.
    pub fn revert(&self) -> (CalendarDate, CivilTime) {
        shift_minutes(self.date, self.time, -self.offset_minutes)
    }
}

/// Correct a civil birth time for `region`.
pub fn correct(date: CalendarDate, time: CivilTime, region: &Region) -> TimeCorrection {
    let special_period = is_special_period(date);
    let reference = reference_meridian(date);
    let offset = offset_minutes(reference, region.longitude);
    let (date, time) = shift_minutes(date, time, offset);
    TimeCorrection {
        date,
        time,
        reference_meridian_deg: reference,
        special_period,
        region_longitude_deg: region.longitude,
        offset_minutes: offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> CivilTime {
        CivilTime::new(h, m).unwrap()
    }

    #[test]
    fn special_period_edges() {
        assert!(!is_special_period(date(1908, 3, 31)));
        assert!(is_special_period(date(1908, 4, 1)));
        assert!(is_special_period(date(1911, 12, 31)));
        assert!(!is_special_period(date(1912, 1, 1)));
        assert!(!is_special_period(date(1954, 3, 20)));
        assert!(is_special_period(date(1954, 3, 21)));
        assert!(is_special_period(date(1961, 8, 9)));
        assert!(!is_special_period(date(1961, 8, 10)));
    }

    #[test]
    fn special_period_compares_full_dates() {
        // Day-of-month alone would exclude these.
        assert!(is_special_period(date(1954, 4, 1)));
        assert!(is_special_period(date(1961, 7, 31)));
        assert!(is_special_period(date(1958, 1, 1)));
    }

    #[test]
    fn offset_rounds_to_whole_minutes() {
        assert_eq!(offset_minutes(135.0, 126.0 + 58.0 / 60.0), 32);
        assert_eq!(offset_minutes(127.5, 126.0 + 58.0 / 60.0), 2);
        assert_eq!(offset_minutes(135.0, 135.0), 0);
        assert_eq!(offset_minutes(127.5, 129.0 + 18.0 / 60.0), -7);
    }

    #[test]
    fn shift_within_day() {
        assert_eq!(
            shift_minutes(date(2000, 1, 1), time(12, 0), 32),
            (date(2000, 1, 1), time(12, 32))
        );
    }

    #[test]
    fn shift_rolls_forward_over_year_end() {
        assert_eq!(
            shift_minutes(date(1999, 12, 31), time(23, 50), 32),
            (date(2000, 1, 1), time(0, 22))
        );
    }

    #[test]
    fn shift_rolls_back_into_leap_day() {
        assert_eq!(
            shift_minutes(date(2024, 3, 1), time(0, 3), -7),
            (date(2024, 2, 29), time(23, 56))
        );
    }

    #[test]
    fn shift_multiple_days() {
        assert_eq!(
            shift_minutes(date(2000, 1, 1), time(0, 0), -3 * 1440 - 1),
            (date(1999, 12, 28), time(23, 59))
        );
        assert_eq!(
            shift_minutes(date(2000, 2, 28), time(12, 0), 2 * 1440),
            (date(2000, 3, 1), time(12, 0))
        );
    }

    #[test]
    fn correct_seoul_new_year_2000() {
        let seoul = Region::new("서울특별시", 126.0 + 58.0 / 60.0, 37.55);
        let c = correct(date(2000, 1, 1), time(12, 0), &seoul);
        assert_eq!(c.offset_minutes, 32);
        assert_eq!(c.reference_meridian_deg, 135.0);
        assert!(!c.special_period);
        assert_eq!((c.date, c.time), (date(2000, 1, 1), time(12, 32)));
        assert_eq!(c.revert(), (date(2000, 1, 1), time(12, 0)));
    }
}
