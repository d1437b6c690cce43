//! Stem-branch pillars and the 60-pair sexagenary cycle.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Length of the combined stem-branch cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// A (stem, branch) pair.
///
/// Only pairs of equal polarity occur in the cycle; every constructor in
/// this crate preserves that, and [`Pillar::new`] rejects mixed pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair `stem` and `branch`, or `None` if their polarities differ.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        (stem.polarity() == branch.polarity()).then_some(Self { stem, branch })
    }

    /// Pillar built from independent stem and branch counters.
    ///
    /// Callers must advance both counters by the same amount from a pair of
    /// equal parity.
    pub(crate) const fn from_indices(stem_index: i64, branch_index: i64) -> Self {
        Self {
            stem: Stem::from_index(stem_index),
            branch: Branch::from_index(branch_index),
        }
    }

    /// Pillar at position `n` of the cycle (0 = 갑자, 59 = 계해), modulo 60.
    pub const fn from_cycle_index(n: i64) -> Self {
        Self::from_indices(n, n)
    }

    /// Position in the 60-pair cycle, 0..60.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        // n ≡ s (mod 10), n ≡ b (mod 12)  =>  n = s + 10k with 10k ≡ b - s (mod 12)
        let k = ((b - s).rem_euclid(12) / 2 * 5).rem_euclid(6);
        (s + 10 * k) as u8
    }

    /// Pillar `n` steps further along the 60-pair cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    /// Two-syllable hangul name, e.g. `갑자`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Elements of the stem and the branch.
    pub const fn elements(self) -> [Element; 2] {
        [self.stem.element(), self.branch.element()]
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrip() {
        for n in 0..CYCLE_LENGTH as i64 {
            let p = Pillar::from_cycle_index(n);
            assert_eq!(p.cycle_index() as i64, n, "{p}");
        }
    }

    #[test]
    fn cycle_endpoints() {
        assert_eq!(Pillar::from_cycle_index(0).to_string(), "갑자");
        assert_eq!(Pillar::from_cycle_index(59).to_string(), "계해");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
        assert_eq!(Pillar::from_cycle_index(-1).to_string(), "계해");
    }

    #[test]
    fn mixed_polarity_rejected() {
        assert!(Pillar::new(Stem::Gap, Branch::Chuk).is_none());
        assert_eq!(
            Pillar::new(Stem::Gyeong, Branch::Jin).map(|p| p.cycle_index()),
            Some(16)
        );
    }

    #[test]
    fn offset_moves_both_parts() {
        let p = Pillar::new(Stem::Mu, Branch::Ja).unwrap();
        assert_eq!(p.offset(1).to_string(), "기축");
        assert_eq!(p.offset(-1).to_string(), "정해");
    }

    #[test]
    fn hanja_name() {
        assert_eq!(Pillar::from_cycle_index(0).hanja(), "甲子");
    }
}
