//! Input and output types of chart assembly.

use std::fmt::{Display, Formatter};

use saju_base::{
    Branch, FiveElementTally, FortuneDirection, Gender, MajorFortuneEntry, Pillar, StageTable,
    Stem, TwelveStage, twelve_stage_in,
};
use saju_config::{ChartConfig, Region};
use saju_gateway::LunarDate;
use saju_time::{CalendarDate, CivilTime};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::correction::TimeCorrection;

/// Calendar the birth date was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CalendarKind {
    Solar,
    Lunar { leap_month: bool },
}

/// Birth data as entered.
///
/// `year`/`month`/`day` are not validated on construction because a lunar
/// date such as the 30th of the second month has no Gregorian counterpart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time: CivilTime,
    pub gender: Gender,
    pub calendar: CalendarKind,
    pub region: String,
}

impl BirthInput {
    pub fn solar(
        date: CalendarDate,
        time: CivilTime,
        gender: Gender,
        region: impl Into<String>,
    ) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            time,
            gender,
            calendar: CalendarKind::Solar,
            region: region.into(),
        }
    }

    pub fn lunar(date: LunarDate, time: CivilTime, gender: Gender, region: impl Into<String>) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            time,
            gender,
            calendar: CalendarKind::Lunar {
                leap_month: date.leap_month,
            },
            region: region.into(),
        }
    }

    pub const fn is_lunar(&self) -> bool {
        matches!(self.calendar, CalendarKind::Lunar { .. })
    }
}

/// Input after lunar conversion and longitude correction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectedBirth {
    /// Gregorian birth date before correction.
    pub solar_date: CalendarDate,
    /// Region actually used (the default region when the name was unknown).
    pub region: Region,
    pub correction: TimeCorrection,
}

impl CorrectedBirth {
    pub const fn date(&self) -> CalendarDate {
        self.correction.date
    }

    pub const fn time(&self) -> CivilTime {
        self.correction.time
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Element count over all eight stems and branches.
    pub fn element_tally(&self) -> FiveElementTally {
        self.as_array().iter().flat_map(|p| p.elements()).collect()
    }

    /// Twelve stage of each pillar's branch relative to the day stem.
    pub fn twelve_stages(&self, table: StageTable) -> TwelveStages {
        let stage = |b: Branch| twelve_stage_in(table, self.day.stem, b);
        TwelveStages {
            table,
            year: stage(self.year.branch),
            month: stage(self.month.branch),
            day: stage(self.day.branch),
            hour: stage(self.hour.branch),
        }
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Stages are serialized with the labels of `table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwelveStages {
    pub table: StageTable,
    pub year: TwelveStage,
    pub month: TwelveStage,
    pub day: TwelveStage,
    pub hour: TwelveStage,
}

impl TwelveStages {
    /// Labels in year, month, day, hour order.
    pub const fn labels(&self) -> [&'static str; 4] {
        [
            self.year.label(self.table),
            self.month.label(self.table),
            self.day.label(self.table),
            self.hour.label(self.table),
        ]
    }
}

impl Serialize for TwelveStages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [year, month, day, hour] = self.labels();
        let mut st = serializer.serialize_struct("TwelveStages", 5)?;
        st.serialize_field("table", &self.table)?;
        st.serialize_field("year", year)?;
        st.serialize_field("month", month)?;
        st.serialize_field("day", day)?;
        st.serialize_field("hour", hour)?;
        st.end()
    }
}

/// A complete four-pillar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub input: BirthInput,
    pub corrected: CorrectedBirth,
    /// Lunar date of the birth, when known.
    pub lunar_equivalent: Option<LunarDate>,
    /// Options the chart was built with.
    pub options: ChartConfig,
    pub pillars: FourPillars,
    /// Stem of the day pillar.
    pub day_master: Stem,
    /// Solar month (1..=12) of the corrected date.
    pub solar_month: u8,
    pub elements: FiveElementTally,
    pub twelve_stages: TwelveStages,
    pub fortune_direction: FortuneDirection,
    pub major_fortune: Vec<MajorFortuneEntry>,
}
