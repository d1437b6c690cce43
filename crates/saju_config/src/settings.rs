//! Chart options and gateway settings, loadable from a TOML file.
//!
//! ```toml
//! [chart]
//! year_boundary = "start-of-spring"
//! fortune_start = "solar-term"
//! twelve_stage_table = "traditional"
//!
//! [gateway]
//! service_key_env = "KASI_SERVICE_KEY"
//! timeout_secs = 5
//!
//! [[regions]]
//! name = "강릉시"
//! longitude = 128.9
//! latitude = 37.75
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::region::{Region, RegionTable};

pub const DEFAULT_GATEWAY_BASE_URL: &str =
    "http://apis.data.go.kr/B090041/openapi/service/LrsrCldInfoService";
pub const DEFAULT_SERVICE_KEY_ENV: &str = "KASI_SERVICE_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FIXED_START_AGE: u32 = 10;

/// Which date starts a new year pillar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearBoundary {
    /// January 1st.
    #[default]
    CalendarYear,
    /// 입춘: dates in January/February still in solar month 11 or 12
    /// belong to the previous year.
    StartOfSpring,
}

/// How the first major-fortune age is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FortuneStart {
    /// Always `fixed_start_age`.
    #[default]
    Fixed,
    /// From the distance to the nearest solar-term boundary in the
    /// direction of travel.
    SolarTerm,
}

/// Start-branch table for the twelve stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TwelveStageTable {
    /// Both stems of an element share one start; stage 4 is 대왕.
    #[default]
    Paired,
    /// Separate starts for yin stems; stage 4 is 제왕.
    Traditional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub year_boundary: YearBoundary,
    pub fortune_start: FortuneStart,
    pub fixed_start_age: u32,
    pub twelve_stage_table: TwelveStageTable,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            year_boundary: YearBoundary::default(),
            fortune_start: FortuneStart::default(),
            fixed_start_age: DEFAULT_FIXED_START_AGE,
            twelve_stage_table: TwelveStageTable::default(),
        }
    }
}

/// Lunar/solar conversion service settings. The API key itself is read
/// from the environment variable named by `service_key_env`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    pub service_key_env: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
            service_key_env: DEFAULT_SERVICE_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Value of the service-key environment variable, if set and non-empty.
    pub fn service_key(&self) -> Option<String> {
        std::env::var(&self.service_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

/// Extra or overriding region, decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<&RegionEntry> for Region {
    fn from(e: &RegionEntry) -> Self {
        Region::new(e.name.trim(), e.longitude, e.latitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    pub chart: ChartConfig,
    pub gateway: GatewayConfig,
    pub regions: Vec<RegionEntry>,
}

impl SajuConfig {
    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: SajuConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart.fixed_start_age == 0 {
            return Err(ConfigError::Invalid(
                "chart.fixed_start_age must be greater than zero",
            ));
        }
        if self.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("gateway.base_url must not be empty"));
        }
        if self.gateway.service_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "gateway.service_key_env must not be empty",
            ));
        }
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "gateway.timeout_secs must be greater than zero",
            ));
        }
        for r in &self.regions {
            if r.name.trim().is_empty() {
                return Err(ConfigError::Invalid("regions.name must not be empty"));
            }
            if !(-180.0..=180.0).contains(&r.longitude) {
                return Err(ConfigError::Invalid(
                    "regions.longitude must be within [-180, 180]",
                ));
            }
            if !(-90.0..=90.0).contains(&r.latitude) {
                return Err(ConfigError::Invalid(
                    "regions.latitude must be within [-90, 90]",
                ));
            }
        }
        Ok(())
    }

    /// Built-in table with this config's region entries applied on top.
    pub fn region_table(&self) -> RegionTable {
        let mut table = RegionTable::builtin();
        for entry in &self.regions {
            table.insert(Region::from(entry));
        }
        table
    }
}
