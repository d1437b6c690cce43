//! The ten heavenly stems (천간).
//!
//! Stems alternate yang/yin and pair up by element: 갑을 wood, 병정 fire,
//! 무기 earth, 경신 metal, 임계 water.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::Element;

/// Yang (even cycle index) or yin (odd cycle index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// The 10 stems starting from 갑 (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = 갑, 9 = 계).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based cycle index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `index` reduced modulo 10; negative indices wrap backward.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Hangul syllable.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `n` steps further along the cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_roundtrip() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Gap);
        assert_eq!(Stem::from_index(-1), Stem::Gye);
        assert_eq!(Stem::Im.offset(3), Stem::Eul);
        assert_eq!(Stem::Eul.offset(-3), Stem::Im);
    }

    #[test]
    fn each_element_owns_two_stems() {
        for e in Element::all() {
            let n = ALL_STEMS.iter().filter(|s| s.element() == *e).count();
            assert_eq!(n, 2, "{e:?}");
        }
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gyeong.polarity(), Polarity::Yang);
    }
}
