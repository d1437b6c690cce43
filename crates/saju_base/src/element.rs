//! Five elements (오행) and per-chart element tallies.

use serde::Serialize;

/// The five elements in generating order (wood feeds fire, fire makes earth, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// All 5 elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

/// Count of each element over a set of stems and branches.
///
/// Every element is always present, possibly with a zero count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FiveElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl FiveElementTally {
    /// Increment the count for `element`.
    pub fn add(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    pub const fn count(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum over all five elements.
    pub const fn total(&self) -> u32 {
        self.wood as u32 + self.fire as u32 + self.earth as u32 + self.metal as u32 + self.water as u32
    }

    /// `(element, count)` pairs in generating order.
    pub fn entries(&self) -> [(Element, u8); 5] {
        ALL_ELEMENTS.map(|e| (e, self.count(e)))
    }
}

impl FromIterator<Element> for FiveElementTally {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut tally = Self::default();
        for e in iter {
            tally.add(e);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn empty_tally_has_all_keys() {
        let t = FiveElementTally::default();
        assert_eq!(t.total(), 0);
        assert_eq!(t.entries().len(), 5);
    }

    #[test]
    fn tally_from_iter() {
        let t: FiveElementTally = [Element::Fire, Element::Earth, Element::Earth]
            .into_iter()
            .collect();
        assert_eq!(t.fire, 1);
        assert_eq!(t.earth, 2);
        assert_eq!(t.count(Element::Water), 0);
        assert_eq!(t.total(), 3);
    }
}
