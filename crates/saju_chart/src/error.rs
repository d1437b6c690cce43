//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::CycleError;
use saju_gateway::GatewayError;
use saju_solar::SolarError;
use saju_time::TimeError;

/// Errors from building a chart. A chart is either returned complete or
/// not at all.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time failed validation.
    Time(TimeError),
    /// Other rejected input (gender token, lunar date fields, hour).
    InvalidInput(String),
    /// Lunar-to-solar conversion failed.
    Gateway(GatewayError),
    /// An internal invariant did not hold.
    Consistency(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid input: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Gateway(e) => write!(f, "calendar conversion failed: {e}"),
            Self::Consistency(msg) => write!(f, "consistency violation: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<GatewayError> for ChartError {
    fn from(e: GatewayError) -> Self {
        Self::Gateway(e)
    }
}

impl From<SolarError> for ChartError {
    fn from(e: SolarError) -> Self {
        Self::Consistency(e.to_string())
    }
}

impl From<CycleError> for ChartError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::Solar(s) => Self::from(s),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
