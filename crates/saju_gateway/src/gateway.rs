//! The conversion contract consumed by chart assembly.

use crate::error::GatewayError;
use crate::types::{ConversionRequest, ConversionResult};

/// Lunar ↔ solar date conversion.
///
/// Implementations must report a non-success answer as an error; callers
/// never fall back to the unconverted date.
pub trait CalendarConversionGateway: Send + Sync {
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, GatewayError>;
}
