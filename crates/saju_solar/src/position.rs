//! Low-precision true ecliptic longitude of the Sun.
//!
//! Mean longitude, mean anomaly and eccentricity are polynomials in Julian
//! centuries `T` since J2000.0; the equation of the centre uses the first
//! three terms of its series in `sin(M)`, `sin(2M)`, `sin(3M)`.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 25, "low
//! accuracy" method. Nutation and aberration are ignored, so results are
//! good to roughly 0.01 deg, i.e. well under a day for boundary finding.

use saju_time::{CalendarDate, calendar_to_jd, jd_to_centuries};
use serde::Serialize;

use crate::util::normalize_360;

/// Hour of day used when a date is sampled without a time.
pub const DEFAULT_SAMPLE_HOUR: f64 = 12.0;

/// Geometric mean longitude of the Sun, degrees, normalized to [0, 360).
pub fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t * t)
}

/// Mean anomaly of the Sun, degrees (not normalized).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35999.05029 * t - 0.0001537 * t * t
}

/// Eccentricity of the Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - 0.000042037 * t - 0.0000001267 * t * t
}

/// Equation of the centre, degrees, for mean anomaly `m_deg`.
pub fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Intermediate and final quantities of one solar-position evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// Julian Date of the evaluated instant.
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    pub mean_longitude_deg: f64,
    pub mean_anomaly_deg: f64,
    pub eccentricity: f64,
    pub equation_of_center_deg: f64,
    /// True ecliptic longitude in [0, 360).
    pub true_longitude_deg: f64,
}

/// Evaluate the Sun's position for a Julian Date.
pub fn solar_position_jd(jd: f64) -> SolarPosition {
    let t = jd_to_centuries(jd);
    let l0 = mean_longitude_deg(t);
    let m = mean_anomaly_deg(t);
    let e = eccentricity(t);
    let c = equation_of_center_deg(t, m);
    SolarPosition {
        jd,
        t,
        mean_longitude_deg: l0,
        mean_anomaly_deg: m,
        eccentricity: e,
        equation_of_center_deg: c,
        true_longitude_deg: normalize_360(l0 + c),
    }
}

/// Evaluate the Sun's position for a civil date at `hour` (fractional hours).
pub fn solar_position(date: CalendarDate, hour: f64) -> SolarPosition {
    let jd = calendar_to_jd(date.year, date.month, date.day as f64 + hour / 24.0);
    solar_position_jd(jd)
}

/// True ecliptic longitude of the Sun in degrees, [0, 360).
pub fn solar_longitude(date: CalendarDate, hour: f64) -> f64 {
    solar_position(date, hour).true_longitude_deg
}

/// True ecliptic longitude at [`DEFAULT_SAMPLE_HOUR`].
pub fn solar_longitude_at_noon(date: CalendarDate) -> f64 {
    solar_longitude(date, DEFAULT_SAMPLE_HOUR)
}
