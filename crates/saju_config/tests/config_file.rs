//! Loading a config file from disk.

use std::path::PathBuf;

use saju_config::{FortuneStart, SajuConfig, YearBoundary};

fn write_temp(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("saju_config_{}_{name}.toml", std::process::id()));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn load_partial_file() {
    let path = write_temp("partial", "[chart]\nyear_boundary = \"start-of-spring\"\n");
    let c = SajuConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(c.chart.year_boundary, YearBoundary::StartOfSpring);
    assert_eq!(c.chart.fortune_start, FortuneStart::Fixed);
    assert_eq!(c.region_table().len(), 41);
}

#[test]
fn region_override_from_file() {
    let path = write_temp(
        "override",
        "[[regions]]\nname = \"부산광역시\"\nlongitude = 129.0\nlatitude = 35.1\n",
    );
    let c = SajuConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let table = c.region_table();
    assert_eq!(table.len(), 41);
    assert_eq!(table.lookup("부산광역시").longitude, 129.0);
}
