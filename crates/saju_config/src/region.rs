//! Region coordinates used for birth-time longitude correction.
//!
//! The built-in table covers Seoul, the Gyeonggi cities, the metropolitan
//! cities and Jeju. Coordinates are kept as whole degrees plus arc-minutes
//! (the way the published tables list them) and exposed as decimal degrees.

use serde::Serialize;

/// Region used when a name is not in the table.
pub const DEFAULT_REGION_NAME: &str = "서울특별시";

/// Degrees and arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegMin {
    pub degrees: u16,
    pub minutes: u8,
}

impl DegMin {
    pub const fn new(degrees: u16, minutes: u8) -> Self {
        Self { degrees, minutes }
    }

    pub fn to_deg(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0
    }
}

/// A named location in decimal degrees (east longitude, north latitude).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Region {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
        }
    }
}

/// (name, longitude, latitude)
const BUILTIN_REGIONS: [(&str, DegMin, DegMin); 41] = [
    ("서울특별시", DegMin::new(126, 58), DegMin::new(37, 33)),
    ("인천광역시", DegMin::new(126, 42), DegMin::new(37, 45)),
    ("경기도 수원시", DegMin::new(127, 0), DegMin::new(37, 16)),
    ("경기도 성남시", DegMin::new(127, 8), DegMin::new(37, 26)),
    ("경기도 고양시", DegMin::new(126, 50), DegMin::new(37, 39)),
    ("경기도 용인시", DegMin::new(127, 12), DegMin::new(37, 16)),
    ("경기도 부천시", DegMin::new(126, 46), DegMin::new(37, 29)),
    ("경기도 안산시", DegMin::new(126, 50), DegMin::new(37, 19)),
    ("경기도 남양주시", DegMin::new(127, 12), DegMin::new(37, 38)),
    ("경기도 안양시", DegMin::new(126, 57), DegMin::new(37, 23)),
    ("경기도 화성시", DegMin::new(126, 55), DegMin::new(37, 12)),
    ("경기도 평택시", DegMin::new(127, 6), DegMin::new(36, 59)),
    ("경기도 의정부시", DegMin::new(127, 2), DegMin::new(37, 44)),
    ("경기도 시흥시", DegMin::new(126, 48), DegMin::new(37, 22)),
    ("경기도 파주시", DegMin::new(126, 46), DegMin::new(37, 45)),
    ("경기도 김포시", DegMin::new(126, 43), DegMin::new(37, 36)),
    ("경기도 광명시", DegMin::new(126, 51), DegMin::new(37, 28)),
    ("경기도 광주시", DegMin::new(127, 15), DegMin::new(37, 25)),
    ("경기도 군포시", DegMin::new(126, 56), DegMin::new(37, 21)),
    ("경기도 이천시", DegMin::new(127, 26), DegMin::new(37, 16)),
    ("경기도 오산시", DegMin::new(127, 2), DegMin::new(37, 9)),
    ("경기도 하남시", DegMin::new(127, 12), DegMin::new(37, 32)),
    ("경기도 양주시", DegMin::new(127, 3), DegMin::new(37, 47)),
    ("경기도 구리시", DegMin::new(127, 8), DegMin::new(37, 35)),
    ("경기도 안성시", DegMin::new(127, 16), DegMin::new(37, 0)),
    ("경기도 포천시", DegMin::new(127, 12), DegMin::new(37, 53)),
    ("경기도 의왕시", DegMin::new(126, 58), DegMin::new(37, 20)),
    ("경기도 여주시", DegMin::new(127, 38), DegMin::new(37, 17)),
    ("경기도 양평군", DegMin::new(127, 29), DegMin::new(37, 29)),
    ("경기도 동두천시", DegMin::new(127, 3), DegMin::new(37, 54)),
    ("경기도 과천시", DegMin::new(126, 59), DegMin::new(37, 25)),
    ("경기도 가평군", DegMin::new(127, 30), DegMin::new(37, 49)),
    ("경기도 연천군", DegMin::new(127, 4), DegMin::new(38, 5)),
    ("부산광역시", DegMin::new(129, 4), DegMin::new(35, 10)),
    ("대구광역시", DegMin::new(128, 36), DegMin::new(35, 52)),
    ("광주광역시", DegMin::new(126, 51), DegMin::new(35, 9)),
    ("대전광역시", DegMin::new(127, 23), DegMin::new(36, 20)),
    ("울산광역시", DegMin::new(129, 18), DegMin::new(35, 32)),
    ("세종특별자치시", DegMin::new(127, 17), DegMin::new(36, 32)),
    ("제주특별자치도 제주시", DegMin::new(126, 32), DegMin::new(33, 30)),
    ("제주특별자치도 서귀포시", DegMin::new(126, 33), DegMin::new(33, 15)),
];

/// Name-to-coordinate table with a guaranteed fallback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
    default: Region,
}

impl RegionTable {
    /// The built-in Korean table, defaulting to Seoul.
    pub fn builtin() -> Self {
        let regions: Vec<Region> = BUILTIN_REGIONS
            .iter()
            .map(|(name, lon, lat)| Region::new(*name, lon.to_deg(), lat.to_deg()))
            .collect();
        let default = Region::new(
            DEFAULT_REGION_NAME,
            DegMin::new(126, 58).to_deg(),
            DegMin::new(37, 33).to_deg(),
        );
        Self { regions, default }
    }

    /// Exact match on the trimmed name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        let name = name.trim();
        self.regions.iter().find(|r| r.name == name)
    }

    /// Like [`RegionTable::get`] but falls back to the default region.
    pub fn lookup(&self, name: &str) -> &Region {
        self.get(name).unwrap_or(&self.default)
    }

    pub fn default_region(&self) -> &Region {
        &self.default
    }

    /// Add `region`, replacing any entry with the same name.
    pub fn insert(&mut self, region: Region) {
        if region.name == self.default.name {
            self.default = region.clone();
        }
        match self.regions.iter_mut().find(|r| r.name == region.name) {
            Some(existing) => *existing = region,
            None => self.regions.push(region),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_size_and_default() {
        let t = RegionTable::builtin();
        assert_eq!(t.len(), 41);
        assert_eq!(t.default_region().name, DEFAULT_REGION_NAME);
        assert_eq!(t.get(DEFAULT_REGION_NAME), Some(t.default_region()));
    }

    #[test]
    fn degree_minute_conversion() {
        let t = RegionTable::builtin();
        let seoul = t.get("서울특별시").unwrap();
        assert!((seoul.longitude - (126.0 + 58.0 / 60.0)).abs() < 1e-12);
        assert!((seoul.latitude - 37.55).abs() < 1e-12);
        let busan = t.get("부산광역시").unwrap();
        assert!((busan.longitude - (129.0 + 4.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn unknown_region_falls_back_to_seoul() {
        let t = RegionTable::builtin();
        assert!(t.get("평양직할시").is_none());
        let r = t.lookup("평양직할시");
        assert_eq!(r.name, DEFAULT_REGION_NAME);
        assert_eq!(r, t.default_region());
    }

    #[test]
    fn lookup_trims_whitespace() {
        let t = RegionTable::builtin();
        assert_eq!(t.lookup("  대전광역시 ").name, "대전광역시");
    }

    #[test]
    fn insert_overrides_and_appends() {
        let mut t = RegionTable::builtin();
        t.insert(Region::new("대전광역시", 127.5, 36.3));
        assert_eq!(t.len(), 41);
        assert_eq!(t.lookup("대전광역시").longitude, 127.5);
        t.insert(Region::new("강릉시", 128.9, 37.75));
        assert_eq!(t.len(), 42);
        assert!(t.get("강릉시").is_some());
    }

    #[test]
    fn overriding_default_updates_fallback() {
        let mut t = RegionTable::builtin();
        t.insert(Region::new(DEFAULT_REGION_NAME, 127.0, 37.5));
        assert_eq!(t.lookup("nowhere").longitude, 127.0);
    }

    #[test]
    fn all_coordinates_in_korea() {
        for r in RegionTable::builtin().iter() {
            assert!((124.0..132.0).contains(&r.longitude), "{}", r.name);
            assert!((33.0..39.0).contains(&r.latitude), "{}", r.name);
        }
    }
}
