//! Four-pillar (사주) birth-chart assembly.
//!
//! This crate provides:
//! - Longitude correction of civil birth times with calendar rollover
//! - [`ChartAssembler`]: lunar conversion, correction, pillars, twelve
//!   stages, five-element tally and major fortune in one pure pipeline
//!
//! ```rust,ignore
//! use saju_base::Gender;
//! use saju_chart::{BirthInput, ChartAssembler};
//! use saju_config::RegionTable;
//!
//! let regions = RegionTable::builtin();
//! let input = BirthInput::solar(
//!     "2000-01-01".parse()?,
//!     "12:00".parse()?,
//!     Gender::Male,
//!     "서울특별시",
//! );
//! let chart = ChartAssembler::new(&regions).assemble(&input)?;
//! println!("{}", chart.pillars);
//! ```

pub mod assemble;
pub mod chart_types;
pub mod correction;
pub mod error;

pub use assemble::{ChartAssembler, ELEMENT_TOTAL, four_pillars, pillar_year, stage_table};
pub use chart_types::{
    BirthInput, CalendarKind, Chart, CorrectedBirth, FourPillars, TwelveStages,
};
pub use correction::{
    MINUTES_PER_DEGREE, SPECIAL_MERIDIAN_DEG, SPECIAL_PERIODS, STANDARD_MERIDIAN_DEG,
    TimeCorrection, correct, is_special_period, offset_minutes, reference_meridian,
    shift_minutes,
};
pub use error::ChartError;
