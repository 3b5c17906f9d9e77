//! Bundled-dataset integration tests
//!
//! Drives the same path the app takes on a fresh offline install:
//! embedded assets → registry → station store → scoring engine.

use std::io::Write;

use purehealth_core::outbreak::OutbreakLevel;
use purehealth_core::time::MS_PER_DAY;
use purehealth_core::trend::{predict_wqi, WqiPoint};
use purehealth_core::wqi::{compute, WqiClass};
use purehealth_datasets::registry::load_stations_from_path;
use purehealth_datasets::{default_registry, DatasetError, SampleRegistry, StationStore};

#[test]
fn default_registry_serves_embedded_data() {
    let registry = default_registry();
    let stations = registry.stations().expect("embedded dataset parses");
    assert_eq!(stations.len(), 3);

    let baselines = registry.disease_baselines().expect("baselines parse");
    assert_eq!(baselines.len(), 4);
}

#[test]
fn clean_and_polluted_sample_stations_diverge() {
    let registry = SampleRegistry::new();

    let godavari = registry.station("MH-GODAVARI-01").unwrap();
    let clean = godavari.assess_latest().unwrap();
    assert!(clean.wqi > 50.0);
    assert!(clean.outbreak.level <= OutbreakLevel::Low);

    let mithi = registry.station("MH-MITHI-07").unwrap();
    let polluted = mithi.assess_latest().unwrap();
    assert!(polluted.wqi < 50.0);
    assert_eq!(polluted.wqi_class, WqiClass::D);
    assert_eq!(polluted.outbreak.level, OutbreakLevel::High);
    assert!(polluted.estimated_cases > clean.estimated_cases);
}

#[test]
fn seeded_store_answers_range_queries() {
    let registry = SampleRegistry::new();
    let store = StationStore::seeded_from(&registry).unwrap();

    let full = store.station_history("MH-GODAVARI-01");
    assert_eq!(full.len(), 3);
    assert!(full.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    // Slice out everything before the last reading
    let last = full.last().unwrap().timestamp;
    let earlier = store.readings_in_range("MH-GODAVARI-01", 0, last);
    assert_eq!(earlier.len(), 2);
}

#[test]
fn sample_history_feeds_trend_prediction() {
    let registry = SampleRegistry::new();
    let station = registry.station("MH-GODAVARI-01").unwrap();

    let history: Vec<WqiPoint> = station
        .readings
        .iter()
        .map(|reading| WqiPoint {
            timestamp: reading.timestamp,
            wqi: compute(&reading.sample()),
        })
        .collect();

    // Coliform climbs across the curated readings, so the fitted
    // trend must point down and the prediction stay in range
    let predicted = predict_wqi(&history, 7 * MS_PER_DAY).unwrap();
    assert!((0.0..=100.0).contains(&predicted));
    assert!(predicted < history[0].wqi);
}

#[test]
fn field_file_loads_through_the_same_parser() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"stations": [{{
            "stationId": "MH-FIELD-01",
            "name": "Handpump cluster",
            "district": "Latur",
            "river": "Manjara",
            "readings": [
                {{"timestamp": "2024-06-01T08:00:00Z",
                  "parameters": {{"pH": "6.9", "fecalColiform": {{"value": 120}}}}}}
            ]
        }}]}}"#
    )
    .unwrap();

    let stations = load_stations_from_path(file.path()).unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].readings[0].param("fecalColiform", 10.0), 120.0);
}

#[test]
fn missing_and_malformed_field_files_degrade_to_errors() {
    let missing = load_stations_from_path(std::path::Path::new("/no/such/file.json"));
    assert!(matches!(missing, Err(DatasetError::Unreadable { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();
    let malformed = load_stations_from_path(file.path());
    assert!(matches!(malformed, Err(DatasetError::Malformed { .. })));
}
