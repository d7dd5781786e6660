//! End-to-end test of the store -> filter -> marker pipeline.

use std::io::Write;

use courtside_locations::{filter, to_markers, LocationStore};

#[test]
fn test_search_pipeline_for_lincoln_park() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("locations.json");
    let mut f = std::fs::File::create(&path).expect("create");
    f.write_all(
        br#"[{
            "name": "Lincoln Park",
            "address": "2045 N Lincoln Park West",
            "latitude": 41.9,
            "longitude": -87.6,
            "count": 4,
            "facility_type": "Public"
        }]"#,
    )
    .expect("write");

    let (store, issues) = LocationStore::load(&path).expect("load");
    assert!(issues.is_empty());
    assert_eq!(store.len(), 1);

    let filtered = filter(store.records(), "lincoln").expect("filter");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Lincoln Park");

    let markers = to_markers(filtered.iter().copied());
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].tooltip, "Lincoln Park");
    assert_eq!(markers[0].latitude, 41.9);
    assert_eq!(markers[0].longitude, -87.6);
}
