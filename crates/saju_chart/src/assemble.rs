//! Four-pillar chart assembly.
//!
//! Pipeline: optional lunar → solar conversion, longitude correction, the
//! four pillars, twelve stages, element tally and major fortune. Every step
//! after conversion is a pure function of the corrected date and time.

use saju_base::{
    FiveElementTally, day_pillar, fortune_direction, hour_pillar, major_fortune_sequence_from_age,
    StageTable, month_pillar_for_index, solar_term_start_age, year_pillar,
};
use saju_config::{ChartConfig, FortuneStart, RegionTable, TwelveStageTable, YearBoundary};
use saju_gateway::{CalendarConversionGateway, ConversionRequest, GatewayError, LunarDate};
use saju_solar::classify;
use saju_time::{CalendarDate, SUPPORTED_MAX, SUPPORTED_MIN};
use tracing::{debug, info, warn};

use crate::chart_types::{BirthInput, CalendarKind, Chart, CorrectedBirth, FourPillars};
use crate::correction::correct;
use crate::error::ChartError;

/// Stems plus branches over four pillars.
pub const ELEMENT_TOTAL: u32 = 8;

/// Longest lunar month.
const MAX_LUNAR_DAY: u32 = 30;

/// Year number whose pillar applies to `date` in solar month `solar_month`.
pub fn pillar_year(date: CalendarDate, solar_month: u8, boundary: YearBoundary) -> i32 {
    match boundary {
        YearBoundary::CalendarYear => date.year,
        YearBoundary::StartOfSpring if date.month <= 2 && solar_month >= 11 => date.year - 1,
        YearBoundary::StartOfSpring => date.year,
    }
}

/// Stage table selected by a chart option.
pub const fn stage_table(option: TwelveStageTable) -> StageTable {
    match option {
        TwelveStageTable::Paired => StageTable::Paired,
        TwelveStageTable::Traditional => StageTable::Traditional,
    }
}

/// Four pillars and the solar month for a corrected date and time.
pub fn four_pillars(
    date: CalendarDate,
    hour: u32,
    boundary: YearBoundary,
) -> Result<(FourPillars, u8), ChartError> {
    let solar_month = classify(date)?;
    let year = year_pillar(pillar_year(date, solar_month, boundary));
    let month = month_pillar_for_index(year.stem, solar_month)?;
    let day = day_pillar(date);
    let hour = hour_pillar(day.stem, hour)?;
    Ok((
        FourPillars {
            year,
            month,
            day,
            hour,
        },
        solar_month,
    ))
}

/// Builds charts against a region table, options and an optional gateway.
pub struct ChartAssembler<'a> {
    regions: &'a RegionTable,
    options: ChartConfig,
    gateway: Option<&'a dyn CalendarConversionGateway>,
}

impl<'a> ChartAssembler<'a> {
    /// Default options, no gateway (lunar input is rejected).
    pub fn new(regions: &'a RegionTable) -> Self {
        Self {
            regions,
            options: ChartConfig::default(),
            gateway: None,
        }
    }

    pub fn with_options(mut self, options: ChartConfig) -> Self {
        self.options = options;
        self
    }

    pub fn with_gateway(mut self, gateway: &'a dyn CalendarConversionGateway) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn options(&self) -> &ChartConfig {
        &self.options
    }

    /// Gregorian birth date for `input`, converting lunar dates.
    pub fn solar_date(&self, input: &BirthInput) -> Result<CalendarDate, ChartError> {
        match input.calendar {
            CalendarKind::Solar => Ok(CalendarDate::new_supported(
                input.year,
                input.month,
                input.day,
            )?),
            CalendarKind::Lunar { leap_month } => {
                if !(SUPPORTED_MIN.year..=SUPPORTED_MAX.year).contains(&input.year)
                    || !(1..=12).contains(&input.month)
                    || !(1..=MAX_LUNAR_DAY).contains(&input.day)
                {
                    return Err(ChartError::InvalidInput(format!(
                        "invalid lunar date {}-{:02}-{:02}",
                        input.year, input.month, input.day
                    )));
                }
                let gateway = self.gateway.ok_or(GatewayError::Unavailable)?;
                let lunar = LunarDate::new(input.year, input.month, input.day, leap_month);
                let result = gateway.convert(&ConversionRequest::lunar_to_solar(lunar))?;
                let solar = result.solar_date()?.ensure_supported()?;
                info!("lunar {lunar} converted to solar {solar}");
                Ok(solar)
            }
        }
    }

    /// Lunar date of the birth. Solar inputs are looked up through the
    /// gateway when one is set; that lookup is informational, so a failure
    /// is logged and yields `None`.
    pub fn lunar_equivalent(&self, input: &BirthInput, solar_date: CalendarDate) -> Option<LunarDate> {
        match input.calendar {
            CalendarKind::Lunar { leap_month } => Some(LunarDate::new(
                input.year,
                input.month,
                input.day,
                leap_month,
            )),
            CalendarKind::Solar => {
                let gateway = self.gateway?;
                let result = gateway
                    .convert(&ConversionRequest::solar_to_lunar(solar_date))
                    .and_then(|r| r.lunar_date());
                match result {
                    Ok(lunar) => {
                        debug!("solar {solar_date} is lunar {lunar}");
                        Some(lunar)
                    }
                    Err(e) => {
                        warn!("lunar lookup for {solar_date} failed: {e}");
                        None
                    }
                }
            }
        }
    }

    /// Build a complete chart or fail without partial output.
    ///
    /// Only the entered date is range-checked. A correction may carry a
    /// birth late on 2100-12-31 into 2101-01-01; the pillars are then
    /// computed for that corrected date.
    pub fn assemble(&self, input: &BirthInput) -> Result<Chart, ChartError> {
        let solar_date = self.solar_date(input)?;

        let region = match self.regions.get(&input.region) {
            Some(r) => r.clone(),
            None => {
                let fallback = self.regions.default_region();
                warn!(
                    "unknown region '{}', using {}",
                    input.region, fallback.name
                );
                fallback.clone()
            }
        };

        let correction = correct(solar_date, input.time, &region);
        debug!(
            "time correction: {} {} -> {} {} ({:+} min, meridian {}, special period {})",
            solar_date,
            input.time,
            correction.date,
            correction.time,
            correction.offset_minutes,
            correction.reference_meridian_deg,
            correction.special_period
        );

        let (pillars, solar_month) = four_pillars(
            correction.date,
            correction.time.hour,
            self.options.year_boundary,
        )?;
        debug!("pillars: {pillars} (solar month {solar_month})");

        let elements: FiveElementTally = pillars.element_tally();
        if elements.total() != ELEMENT_TOTAL {
            return Err(ChartError::Consistency(format!(
                "element tally sums to {}, expected {ELEMENT_TOTAL}",
                elements.total()
            )));
        }
        let twelve_stages = pillars.twelve_stages(stage_table(self.options.twelve_stage_table));

        let direction = fortune_direction(pillars.year.stem, input.gender);
        let start_age = match self.options.fortune_start {
            FortuneStart::Fixed => self.options.fixed_start_age,
            FortuneStart::SolarTerm => solar_term_start_age(correction.date, direction)?,
        };
        let major_fortune = major_fortune_sequence_from_age(
            pillars.year.stem,
            pillars.month,
            solar_date.year,
            input.gender,
            start_age,
        );
        debug!("major fortune: {direction:?} from age {start_age}");

        let lunar_equivalent = self.lunar_equivalent(input, solar_date);

        Ok(Chart {
            input: input.clone(),
            corrected: CorrectedBirth {
                solar_date,
                region,
                correction,
            },
            lunar_equivalent,
            options: self.options.clone(),
            day_master: pillars.day.stem,
            pillars,
            solar_month,
            elements,
            twelve_stages,
            fortune_direction: direction,
            major_fortune,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn pillar_year_calendar_boundary() {
        assert_eq!(pillar_year(date(2024, 1, 20), 12, YearBoundary::CalendarYear), 2024);
    }

    #[test]
    fn pillar_year_start_of_spring() {
        assert_eq!(pillar_year(date(2024, 1, 20), 12, YearBoundary::StartOfSpring), 2023);
        assert_eq!(pillar_year(date(2024, 2, 3), 12, YearBoundary::StartOfSpring), 2023);
        assert_eq!(pillar_year(date(2024, 2, 5), 1, YearBoundary::StartOfSpring), 2024);
        assert_eq!(pillar_year(date(2024, 12, 25), 11, YearBoundary::StartOfSpring), 2024);
    }

    #[test]
    fn four_pillars_new_year_2000() {
        let (p, m) = four_pillars(date(2000, 1, 1), 12, YearBoundary::CalendarYear).unwrap();
        assert_eq!(m, 11);
        assert_eq!(p.to_string(), "경진 무자 무오 무오");
    }

    #[test]
    fn four_pillars_start_of_spring_year() {
        let (p, _) = four_pillars(date(2000, 1, 1), 12, YearBoundary::StartOfSpring).unwrap();
        assert_eq!(p.year.to_string(), "기묘");
        // 기 year: month 11 = 병자
        assert_eq!(p.month.to_string(), "병자");
    }

    #[test]
    fn stage_table_follows_option() {
        assert_eq!(stage_table(TwelveStageTable::Paired), StageTable::Paired);
        assert_eq!(stage_table(TwelveStageTable::Traditional), StageTable::Traditional);
    }

    #[test]
    fn four_pillars_rejects_bad_hour() {
        assert!(matches!(
            four_pillars(date(2000, 1, 1), 24, YearBoundary::CalendarYear),
            Err(ChartError::InvalidInput(_))
        ));
    }
}
