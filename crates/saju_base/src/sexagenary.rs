//! Year, month, day and hour pillars.
//!
//! Every function here is a fixed lookup or modular offset except
//! [`month_pillar`], which asks the solar-term locator which solar month a
//! date falls in.
//!
//! Conventions:
//! - Year: 4 CE is 갑자, so stem = (year - 4) mod 10, branch = (year - 4) mod 12.
//! - Month: solar month 1 (opened by 입춘) is always a 인 month; the month-1
//!   stem follows the five-tiger rule (갑/기 years start at 병, 을/경 at 무, ...).
//! - Day: 1900-01-01 is 갑술 (stem 0, branch 10).
//! - Hour: 2-hour buckets starting 23:00; the stem of the 자 bucket follows
//!   the five-rat rule (갑/기 days start at 갑, 을/경 at 병, ...). 23:00-23:59
//!   is the 자 bucket of the *following* day, so it takes the next day's stem.

use saju_solar::classify;
use saju_time::CalendarDate;

use crate::branch::Branch;
use crate::error::CycleError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Year whose pillar is 갑자.
pub const YEAR_EPOCH: i32 = 4;

/// Reference date of the day cycle.
pub const DAY_EPOCH: CalendarDate = CalendarDate {
    year: 1900,
    month: 1,
    day: 1,
};

/// Pillar of [`DAY_EPOCH`]: 갑술.
pub const DAY_EPOCH_STEM: i64 = 0;
pub const DAY_EPOCH_BRANCH: i64 = 10;

/// Month branches by solar month (index 0 = month 1 = 인).
pub const MONTH_BRANCHES: [Branch; 12] = [
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
    Branch::Ja,
    Branch::Chuk,
];

/// Year pillar for a Gregorian year number.
pub const fn year_pillar(year: i32) -> Pillar {
    let n = year as i64 - YEAR_EPOCH as i64;
    Pillar::from_indices(n, n)
}

/// Stem of solar month 1 in a year with stem `year_stem` (five-tiger rule).
///
/// Year stems pair up five apart and each pair starts two stems further on:
/// 갑기 → 병, 을경 → 무, 병신 → 경, 정임 → 임, 무계 → 갑.
pub const fn month_start_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() as i64 % 5) * 2 + 2)
}

/// Month pillar for solar month `month_index` (1..=12).
pub fn month_pillar_for_index(year_stem: Stem, month_index: u8) -> Result<Pillar, CycleError> {
    if !(1..=12).contains(&month_index) {
        return Err(CycleError::InvalidMonthIndex(month_index));
    }
    let stem = month_start_stem(year_stem).offset(month_index as i64 - 1);
    let branch = MONTH_BRANCHES[month_index as usize - 1];
    Ok(Pillar { stem, branch })
}

/// Month pillar for `date`, classified by the Sun's longitude.
pub fn month_pillar(year_stem: Stem, date: CalendarDate) -> Result<Pillar, CycleError> {
    month_pillar_for_index(year_stem, classify(date)?)
}

/// Day pillar for `date`.
pub const fn day_pillar(date: CalendarDate) -> Pillar {
    let days = date.days_since(DAY_EPOCH);
    Pillar::from_indices(days + DAY_EPOCH_STEM, days + DAY_EPOCH_BRANCH)
}

/// Stem of the 자 hour on a day with stem `day_stem` (five-rat rule).
pub const fn hour_start_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() as i64 % 5) * 2)
}

/// Hour bucket 0..=12: 0 is 00:00-00:59, 1..=11 are 01:00-02:59 .. 21:00-22:59,
/// 12 is 23:00-23:59 (the next day's 자).
pub const fn hour_bucket(hour: u32) -> u32 {
    (hour + 1) / 2
}

/// Hour branch for a wall-clock hour.
pub fn hour_branch(hour: u32) -> Result<Branch, CycleError> {
    if hour > 23 {
        return Err(CycleError::InvalidHour(hour));
    }
    Ok(Branch::from_index(hour_bucket(hour) as i64))
}

/// Hour pillar for `hour` (0..=23) on a day with stem `day_stem`.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, CycleError> {
    if hour > 23 {
        return Err(CycleError::InvalidHour(hour));
    }
    let bucket = hour_bucket(hour) as i64;
    let start = hour_start_stem(day_stem).index() as i64;
    Ok(Pillar::from_indices(start + bucket, bucket))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn year_2000_is_gyeongjin() {
        let p = year_pillar(2000);
        assert_eq!(p.stem.index(), 6);
        assert_eq!(p.branch.index(), 4);
        assert_eq!(p.to_string(), "경진");
    }

    #[test]
    fn year_epoch_is_gapja() {
        assert_eq!(year_pillar(4).to_string(), "갑자");
        assert_eq!(year_pillar(1984).to_string(), "갑자");
        assert_eq!(year_pillar(2024).to_string(), "갑진");
    }

    #[test]
    fn year_period_sixty() {
        for y in 1900..=2100 {
            assert_eq!(year_pillar(y), year_pillar(y + 60));
        }
    }

    #[test]
    fn five_tiger_table() {
        let expected = [
            Stem::Byeong,
            Stem::Mu,
            Stem::Gyeong,
            Stem::Im,
            Stem::Gap,
            Stem::Byeong,
            Stem::Mu,
            Stem::Gyeong,
            Stem::Im,
            Stem::Gap,
        ];
        for (s, e) in Stem::all().iter().zip(expected) {
            assert_eq!(month_start_stem(*s), e, "{s:?}");
        }
    }

    #[test]
    fn month_pillars_of_gap_year() {
        let names: Vec<String> = (1..=12)
            .map(|m| month_pillar_for_index(Stem::Gap, m).unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["병인", "정묘", "무진", "기사", "경오", "신미", "임신", "계유", "갑술", "을해", "병자", "정축"]
        );
    }

    #[test]
    fn month_index_out_of_range() {
        assert_eq!(
            month_pillar_for_index(Stem::Gap, 0),
            Err(CycleError::InvalidMonthIndex(0))
        );
        assert!(month_pillar_for_index(Stem::Gap, 13).is_err());
    }

    #[test]
    fn month_pillar_new_year_2000() {
        // Solar month 11 of a 경 year: 무자
        let p = month_pillar(Stem::Gyeong, date(2000, 1, 1)).unwrap();
        assert_eq!(p.to_string(), "무자");
    }

    #[test]
    fn day_pillar_reference_dates() {
        assert_eq!(day_pillar(DAY_EPOCH).to_string(), "갑술");
        assert_eq!(day_pillar(date(2000, 1, 1)).to_string(), "무오");
        assert_eq!(day_pillar(date(2024, 2, 10)).to_string(), "갑진");
    }

    #[test]
    fn day_pillar_period_sixty() {
        let d = date(1987, 6, 3);
        assert_eq!(day_pillar(d), day_pillar(d.add_days(60)));
        assert_eq!(day_pillar(d).offset(1), day_pillar(d.next_day()));
    }

    #[test]
    fn five_rat_table() {
        let expected = [
            Stem::Gap,
            Stem::Byeong,
            Stem::Mu,
            Stem::Gyeong,
            Stem::Im,
            Stem::Gap,
            Stem::Byeong,
            Stem::Mu,
            Stem::Gyeong,
            Stem::Im,
        ];
        for (s, e) in Stem::all().iter().zip(expected) {
            assert_eq!(hour_start_stem(*s), e, "{s:?}");
        }
    }

    #[test]
    fn hour_branch_buckets() {
        assert_eq!(hour_branch(0).unwrap(), Branch::Ja);
        assert_eq!(hour_branch(1).unwrap(), Branch::Chuk);
        assert_eq!(hour_branch(2).unwrap(), Branch::Chuk);
        assert_eq!(hour_branch(3).unwrap(), Branch::In);
        assert_eq!(hour_branch(12).unwrap(), Branch::O);
        assert_eq!(hour_branch(22).unwrap(), Branch::Hae);
        assert_eq!(hour_branch(23).unwrap(), Branch::Ja);
        assert_eq!(hour_branch(24), Err(CycleError::InvalidHour(24)));
    }

    #[test]
    fn hour_pillars_of_mu_day() {
        assert_eq!(hour_pillar(Stem::Mu, 0).unwrap().to_string(), "임자");
        assert_eq!(hour_pillar(Stem::Mu, 12).unwrap().to_string(), "무오");
        assert_eq!(hour_pillar(Stem::Mu, 22).unwrap().to_string(), "계해");
    }

    #[test]
    fn late_rat_hour_uses_next_day_stem() {
        for s in Stem::all() {
            assert_eq!(
                hour_pillar(*s, 23).unwrap(),
                hour_pillar(s.offset(1), 0).unwrap(),
                "{s:?}"
            );
        }
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(hour_pillar(Stem::Gap, 24), Err(CycleError::InvalidHour(24)));
    }
}
