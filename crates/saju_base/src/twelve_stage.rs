//! Twelve life stages (십이운성) of a branch relative to a day stem.
//!
//! Each stem has a branch where its cycle begins (장생). Yang stems walk
//! the branches forward from there, yin stems walk backward.
//!
//! Two start tables are supported:
//! - [`StageTable::Paired`]: both stems of an element share one start,
//!   甲乙亥 丙丁寅 戊己卯 庚辛午 壬癸申, and stage 4 is labelled 대왕.
//! - [`StageTable::Traditional`]: 甲亥 乙午 丙寅 丁酉 戊寅 己酉 庚巳 辛子
//!   壬申 癸卯 (earth stems share the fire starts), stage 4 is 제왕.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::{Polarity, Stem};

/// Start-branch table used to place 장생 for each day stem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageTable {
    #[default]
    Paired,
    Traditional,
}

impl StageTable {
    /// Branch at which `stem` enters 장생 under this table.
    pub const fn start_branch(self, stem: Stem) -> Branch {
        match self {
            Self::Paired => match stem.element() {
                Element::Wood => Branch::Hae,
                Element::Fire => Branch::In,
                Element::Earth => Branch::Myo,
                Element::Metal => Branch::O,
                Element::Water => Branch::Sin,
            },
            Self::Traditional => match stem {
                Stem::Gap => Branch::Hae,
                Stem::Eul => Branch::O,
                Stem::Byeong | Stem::Mu => Branch::In,
                Stem::Jeong | Stem::Gi => Branch::Yu,
                Stem::Gyeong => Branch::Sa,
                Stem::Sin => Branch::Ja,
                Stem::Im => Branch::Sin,
                Stem::Gye => Branch::Myo,
            },
        }
    }
}

/// The 12 stages in order from 장생.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwelveStage {
    Jangsaeng,
    Mogyok,
    Gwandae,
    Imgwan,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

/// All 12 stages in order (0 = 장생).
pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mogyok,
    TwelveStage::Gwandae,
    TwelveStage::Imgwan,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        match self {
            Self::Jangsaeng => 0,
            Self::Mogyok => 1,
            Self::Gwandae => 2,
            Self::Imgwan => 3,
            Self::Jewang => 4,
            Self::Soe => 5,
            Self::Byeong => 6,
            Self::Sa => 7,
            Self::Myo => 8,
            Self::Jeol => 9,
            Self::Tae => 10,
            Self::Yang => 11,
        }
    }

    /// Korean name as labelled under `table`.
    pub const fn label(self, table: StageTable) -> &'static str {
        match (self, table) {
            (Self::Jewang, StageTable::Paired) => "대왕",
            _ => self.name(),
        }
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jangsaeng => "장생",
            Self::Mogyok => "목욕",
            Self::Gwandae => "관대",
            Self::Imgwan => "임관",
            Self::Jewang => "제왕",
            Self::Soe => "쇠",
            Self::Byeong => "병",
            Self::Sa => "사",
            Self::Myo => "묘",
            Self::Jeol => "절",
            Self::Tae => "태",
            Self::Yang => "양",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Jangsaeng => "長生",
            Self::Mogyok => "沐浴",
            Self::Gwandae => "冠帶",
            Self::Imgwan => "臨官",
            Self::Jewang => "帝旺",
            Self::Soe => "衰",
            Self::Byeong => "病",
            Self::Sa => "死",
            Self::Myo => "墓",
            Self::Jeol => "絶",
            Self::Tae => "胎",
            Self::Yang => "養",
        }
    }

    pub const fn all() -> &'static [TwelveStage; 12] {
        &ALL_TWELVE_STAGES
    }
}

impl Display for TwelveStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TwelveStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Stage of `branch` for day stem `day_stem` under `table`.
pub const fn twelve_stage_in(table: StageTable, day_stem: Stem, branch: Branch) -> TwelveStage {
    let start = table.start_branch(day_stem).index() as i64;
    let b = branch.index() as i64;
    let steps = match day_stem.polarity() {
        Polarity::Yang => b - start,
        Polarity::Yin => start - b,
    };
    ALL_TWELVE_STAGES[steps.rem_euclid(12) as usize]
}

/// Stage of `branch` for day stem `day_stem` under the default table.
pub const fn twelve_stage(day_stem: Stem, branch: Branch) -> TwelveStage {
    twelve_stage_in(StageTable::Paired, day_stem, branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [StageTable; 2] = [StageTable::Paired, StageTable::Traditional];

    #[test]
    fn start_branch_is_jangsaeng() {
        for table in TABLES {
            for s in Stem::all() {
                assert_eq!(
                    twelve_stage_in(table, *s, table.start_branch(*s)),
                    TwelveStage::Jangsaeng
                );
            }
        }
    }

    #[test]
    fn paired_starts_shared_by_element() {
        // 을/해, 무/묘, 경/오, 계/신 all enter 장생
        assert_eq!(twelve_stage(Stem::Eul, Branch::Hae), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Mu, Branch::Myo), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Gyeong, Branch::O), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Gye, Branch::Sin), TwelveStage::Jangsaeng);
        // 乙 runs backward from 亥: 戌 목욕, 未 대왕
        assert_eq!(twelve_stage(Stem::Eul, Branch::Sul), TwelveStage::Mogyok);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Mi), TwelveStage::Jewang);
        // 戊 runs forward from 卯
        assert_eq!(twelve_stage(Stem::Mu, Branch::Jin), TwelveStage::Mogyok);
        assert_eq!(twelve_stage(Stem::Mu, Branch::O), TwelveStage::Imgwan);
        assert_eq!(twelve_stage(Stem::Mu, Branch::Ja), TwelveStage::Jeol);
    }

    #[test]
    fn traditional_yang_stem_forward() {
        let t = StageTable::Traditional;
        // 戊 starts at 寅
        assert_eq!(twelve_stage_in(t, Stem::Mu, Branch::Jin), TwelveStage::Gwandae);
        assert_eq!(twelve_stage_in(t, Stem::Mu, Branch::O), TwelveStage::Jewang);
        assert_eq!(twelve_stage_in(t, Stem::Mu, Branch::Ja), TwelveStage::Tae);
        // 甲: 亥 장생, 卯 제왕, 午 사
        assert_eq!(twelve_stage_in(t, Stem::Gap, Branch::Myo), TwelveStage::Jewang);
        assert_eq!(twelve_stage_in(t, Stem::Gap, Branch::O), TwelveStage::Sa);
    }

    #[test]
    fn traditional_yin_stem_backward() {
        let t = StageTable::Traditional;
        // 乙: 午 장생, 巳 목욕, 寅 제왕, 亥 사
        assert_eq!(twelve_stage_in(t, Stem::Eul, Branch::Sa), TwelveStage::Mogyok);
        assert_eq!(twelve_stage_in(t, Stem::Eul, Branch::In), TwelveStage::Jewang);
        assert_eq!(twelve_stage_in(t, Stem::Eul, Branch::Hae), TwelveStage::Sa);
    }

    #[test]
    fn stage_four_label_depends_on_table() {
        assert_eq!(TwelveStage::Jewang.label(StageTable::Paired), "대왕");
        assert_eq!(TwelveStage::Jewang.label(StageTable::Traditional), "제왕");
        assert_eq!(TwelveStage::Tae.label(StageTable::Paired), "태");
        assert_eq!(StageTable::default(), StageTable::Paired);
    }

    #[test]
    fn each_stem_visits_every_stage_once() {
        for table in TABLES {
            for s in Stem::all() {
                let mut seen = [false; 12];
                for b in Branch::all() {
                    seen[twelve_stage_in(table, *s, *b).index() as usize] = true;
                }
                assert!(seen.iter().all(|&v| v), "{table:?} {s:?}");
            }
        }
    }
}
