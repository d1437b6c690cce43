//! The twelve sectional solar terms (절기) that open each solar month.
//!
//! Each term is the instant the Sun reaches a fixed ecliptic longitude.
//! The terms are 30 deg apart, anchored at 315 deg (입춘, start of spring)
//! for solar month 1.

use serde::Serialize;

/// The 12 sectional terms, in month order starting from 입춘.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 terms in month order (index 0 = 입춘 = month 1).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Boundary longitudes indexed like [`ALL_SOLAR_TERMS`].
pub const SOLAR_TERM_LONGITUDES: [f64; 12] = [
    315.0, 345.0, 15.0, 45.0, 75.0, 105.0, 135.0, 165.0, 195.0, 225.0, 255.0, 285.0,
];

impl SolarTerm {
    /// 0-based index (입춘=0 .. 소한=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baengno => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// The solar month this term opens, 1..=12.
    pub const fn month_index(self) -> u8 {
        self.index() + 1
    }

    /// Term opening solar month `month` (1..=12).
    pub const fn for_month(month: u8) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(ALL_SOLAR_TERMS[(month - 1) as usize])
        } else {
            None
        }
    }

    /// Ecliptic longitude at which the term begins, degrees.
    pub const fn longitude_deg(self) -> f64 {
        SOLAR_TERM_LONGITUDES[self.index() as usize]
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "淸明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }

    /// All 12 terms in month order.
    pub const fn all() -> &'static [SolarTerm; 12] {
        &ALL_SOLAR_TERMS
    }
}
