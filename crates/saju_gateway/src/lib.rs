//! Lunar ↔ solar calendar conversion.
//!
//! Chart assembly consumes the [`CalendarConversionGateway`] trait; the
//! only bundled implementation is [`KasiGateway`], a blocking client for
//! the Korea Astronomy and Space Science Institute service on data.go.kr.

pub mod error;
pub mod gateway;
pub mod kasi;
pub mod types;

pub use error::GatewayError;
pub use gateway::CalendarConversionGateway;
pub use kasi::{KasiGateway, parse_response};
pub use types::{ConversionDirection, ConversionRequest, ConversionResult, LunarDate};
