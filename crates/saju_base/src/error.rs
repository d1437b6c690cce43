//! Error types for sexagenary-cycle calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_solar::SolarError;

/// Errors from pillar and fortune calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CycleError {
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Solar month index outside 1..=12.
    InvalidMonthIndex(u8),
    /// Unrecognized gender token.
    InvalidGender(String),
    /// Solar-term classification failed.
    Solar(SolarError),
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHour(h) => write!(f, "invalid hour {h}, expected 0..=23"),
            Self::InvalidMonthIndex(m) => write!(f, "invalid solar month {m}, expected 1..=12"),
            Self::InvalidGender(s) => {
                write!(f, "invalid gender '{s}', expected male/female or 남/여")
            }
            Self::Solar(e) => write!(f, "solar term error: {e}"),
        }
    }
}

impl Error for CycleError {}

impl From<SolarError> for CycleError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}
