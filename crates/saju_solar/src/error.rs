//! Error types for solar-term classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar-term computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// A longitude fell outside every solar-term interval. The twelve
    /// intervals cover the whole circle, so this means a logic defect or a
    /// non-finite input.
    Unclassified { longitude_deg: f64 },
    /// Walking day by day never left the current solar month.
    NoBoundaryWithin { days: u32 },
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified { longitude_deg } => write!(
                f,
                "solar longitude {longitude_deg} deg matched no solar-term interval"
            ),
            Self::NoBoundaryWithin { days } => {
                write!(f, "no solar-term boundary within {days} days")
            }
        }
    }
}

impl Error for SolarError {}
