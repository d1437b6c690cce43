//! Static configuration for the birth-chart engine.
//!
//! This crate provides:
//! - [`RegionTable`]: region name → longitude/latitude with a Seoul fallback
//! - [`SajuConfig`]: chart options and calendar-gateway settings from TOML

pub mod error;
pub mod region;
pub mod settings;

pub use error::ConfigError;
pub use region::{DEFAULT_REGION_NAME, DegMin, Region, RegionTable};
pub use settings::{
    ChartConfig, DEFAULT_GATEWAY_BASE_URL, DEFAULT_SERVICE_KEY_ENV, DEFAULT_TIMEOUT_SECS,
    FortuneStart, GatewayConfig, RegionEntry, SajuConfig, TwelveStageTable, YearBoundary,
};
