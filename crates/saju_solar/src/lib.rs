//! Solar position and solar-term month boundaries.
//!
//! This crate provides:
//! - Low-precision true ecliptic longitude of the Sun
//! - The 12 sectional solar terms (입춘 .. 소한)
//! - Grid search for the date a target longitude is reached
//! - Classification of any date into one of 12 solar months

pub mod error;
pub mod locator;
pub mod position;
pub mod solar_term;
pub mod util;

pub use error::SolarError;
pub use locator::{
    boundary_date, classify, classify_longitude, days_since_boundary, days_to_next_boundary,
    term_boundaries,
};
pub use position::{
    DEFAULT_SAMPLE_HOUR, SolarPosition, solar_longitude, solar_longitude_at_noon, solar_position,
    solar_position_jd,
};
pub use solar_term::{ALL_SOLAR_TERMS, SOLAR_TERM_LONGITUDES, SolarTerm};
pub use util::{angular_distance, normalize_360};
