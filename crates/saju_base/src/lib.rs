//! Sexagenary-cycle arithmetic for four-pillar birth charts.
//!
//! This crate provides:
//! - The 10 stems, 12 branches and their 60-pair cycle
//! - Year, month, day and hour pillars
//! - Five-element classification and tallies
//! - Twelve life stages relative to a day stem
//! - Major fortune (대운) sequences
//!
//! Everything is a pure function over fixed tables; only the month pillar
//! consults the Sun's position via `saju_solar`.

pub mod branch;
pub mod element;
pub mod error;
pub mod fortune;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod twelve_stage;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, FiveElementTally};
pub use error::CycleError;
pub use fortune::{
    DEFAULT_START_AGE, FORTUNE_PERIOD_YEARS, FortuneDirection, Gender, MAJOR_FORTUNE_COUNT,
    MajorFortuneEntry, fortune_direction, major_fortune_sequence, major_fortune_sequence_from_age,
    solar_term_start_age, start_age_from_days,
};
pub use pillar::{CYCLE_LENGTH, Pillar};
pub use sexagenary::{
    DAY_EPOCH, MONTH_BRANCHES, day_pillar, hour_branch, hour_pillar, hour_start_stem,
    month_pillar, month_pillar_for_index, month_start_stem, year_pillar,
};
pub use stem::{ALL_STEMS, Polarity, Stem};
pub use twelve_stage::{
    ALL_TWELVE_STAGES, StageTable, TwelveStage, twelve_stage, twelve_stage_in,
};
