//! Major fortune (대운) periods.
//!
//! A chart carries 10 ten-year periods. Their pillars walk the 60-pair
//! cycle from the month pillar, forward for a yang-year male or a
//! yin-year female, backward otherwise.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_solar::{days_since_boundary, days_to_next_boundary};
use saju_time::CalendarDate;
use serde::Serialize;

use crate::error::CycleError;
use crate::pillar::Pillar;
use crate::stem::{Polarity, Stem};

/// Number of periods in a sequence.
pub const MAJOR_FORTUNE_COUNT: usize = 10;

/// Length of one period in years.
pub const FORTUNE_PERIOD_YEARS: u32 = 10;

/// Start age used when no birth-time refinement is applied.
pub const DEFAULT_START_AGE: u32 = 10;

/// Days of distance to a solar-term boundary per year of start age.
pub const DAYS_PER_START_YEAR: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = CycleError;

    /// Accepts `male`/`m`/`남`/`남자` and `female`/`f`/`여`/`여자`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            _ => Err(CycleError::InvalidGender(s.to_string())),
        }
    }
}

/// Direction in which the fortune pillars advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneDirection {
    Forward,
    Backward,
}

impl FortuneDirection {
    /// +1 or -1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward for (male, yang year stem) or (female, yin year stem).
pub const fn fortune_direction(year_stem: Stem, gender: Gender) -> FortuneDirection {
    match (gender, year_stem.polarity()) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => {
            FortuneDirection::Forward
        }
        _ => FortuneDirection::Backward,
    }
}

/// One ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MajorFortuneEntry {
    pub pillar: Pillar,
    pub start_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

/// Convert whole days to the nearest solar-term boundary into a start age:
/// three days per year, rounded, at least 1.
pub const fn start_age_from_days(days: u32) -> u32 {
    let age = (days + DAYS_PER_START_YEAR / 2) / DAYS_PER_START_YEAR;
    if age == 0 { 1 } else { age }
}

/// Start age from the distance between `birth` and the solar-term boundary
/// in the direction of travel: the next boundary when running forward, the
/// previous one when running backward.
pub fn solar_term_start_age(
    birth: CalendarDate,
    direction: FortuneDirection,
) -> Result<u32, CycleError> {
    let days = match direction {
        FortuneDirection::Forward => days_to_next_boundary(birth)?,
        FortuneDirection::Backward => days_since_boundary(birth)?,
    };
    Ok(start_age_from_days(days))
}

/// Ten periods starting at `start_age`.
///
/// Entry `i` has pillar `month_pillar` advanced `i` steps in the fortune
/// direction, start age `start_age + 10i` and covers the ten calendar
/// years from `birth_year + start_age + 10i`.
pub fn major_fortune_sequence_from_age(
    year_stem: Stem,
    month_pillar: Pillar,
    birth_year: i32,
    gender: Gender,
    start_age: u32,
) -> Vec<MajorFortuneEntry> {
    let step = fortune_direction(year_stem, gender).step();
    (0..MAJOR_FORTUNE_COUNT)
        .map(|i| {
            let age = start_age + FORTUNE_PERIOD_YEARS * i as u32;
            let start_year = birth_year + age as i32;
            MajorFortuneEntry {
                pillar: month_pillar.offset(step * i as i64),
                start_age: age,
                start_year,
                end_year: start_year + FORTUNE_PERIOD_YEARS as i32 - 1,
            }
        })
        .collect()
}

/// Ten periods starting at [`DEFAULT_START_AGE`].
pub fn major_fortune_sequence(
    year_stem: Stem,
    month_pillar: Pillar,
    birth_year: i32,
    gender: Gender,
) -> Vec<MajorFortuneEntry> {
    major_fortune_sequence_from_age(year_stem, month_pillar, birth_year, gender, DEFAULT_START_AGE)
}
