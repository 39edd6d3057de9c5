//! Test helpers for writing scenario and delivery files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Two depots on the equator, ten degrees apart, one truck each.
pub(super) const SCENARIO_JSON: &str = r#"{
    "depots": [
        {
            "id": 1, "name": "West", "lat": 0.0, "lon": 0.0,
            "vehicles": [
                { "id": 1, "capacity": 100, "average_speed": 10, "max_hours_per_day": 8 }
            ]
        },
        {
            "id": 2, "name": "East", "lat": 0.0, "lon": 10.0,
            "vehicles": [
                { "id": 2, "capacity": 100, "average_speed": 10, "max_hours_per_day": 8 }
            ]
        }
    ],
    "deliveries": [
        { "id": 1, "name": "Near west", "lat": 0.0, "lon": 1.0, "weight": 10, "deadline": 30 }
    ]
}"#;

/// One valid row near the eastern depot and one with a bad latitude.
pub(super) const DELIVERIES_CSV: &str = "id,lat,lon,name,weight,deadline\n\
2,0.0,9.0,Near east,10,30\n\
3,north,9.0,Broken,10,30\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}
