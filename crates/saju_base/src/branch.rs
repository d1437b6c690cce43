//! The twelve earthly branches (지지).
//!
//! Each branch also names a zodiac animal and a two-hour time bucket,
//! starting from 자 (rat) at 23:00-00:59.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::stem::Polarity;

/// The 12 branches starting from 자 (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = 자, 11 = 해).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
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
];

impl Branch {
    /// 0-based cycle index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `index` reduced modulo 12; negative indices wrap backward.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Hangul syllable.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Zodiac animal, in Korean.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }

    /// Earth owns the four "storage" branches 축 진 미 술; every other
    /// element owns two.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Branch `n` steps further along the cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
