//! Parse-once cache for the embedded datasets
//!
//! Mirrors the pattern the backend services use: data is parsed on
//! first access, held behind an `RwLock`, and dropped again with an
//! explicit `clear()`. The registry is a plain value - inject one per
//! test, or use [`default_registry`] for the process-wide instance.

use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use crate::records::{DistrictBaseline, RawDiseaseIndex, RawIndex, Station};
use crate::{DatasetError, DatasetResult};

/// Embedded station readings dataset
const SAMPLE_READINGS_JSON: &str = include_str!("../assets/sample_readings.json");

/// Embedded district disease baselines dataset
const SAMPLE_DISEASE_JSON: &str = include_str!("../assets/sample_disease_data.json");

lazy_static! {
    static ref DEFAULT_REGISTRY: SampleRegistry = SampleRegistry::new();
}

/// Process-wide registry over the embedded datasets
pub fn default_registry() -> &'static SampleRegistry {
    &DEFAULT_REGISTRY
}

/// Thread-safe, parse-once view of the bundled datasets
pub struct SampleRegistry {
    stations: RwLock<Option<Arc<[Station]>>>,
    baselines: RwLock<Option<Arc<[DistrictBaseline]>>>,
}

impl SampleRegistry {
    /// Create an empty registry; nothing is parsed until first access
    pub fn new() -> Self {
        Self {
            stations: RwLock::new(None),
            baselines: RwLock::new(None),
        }
    }

    /// All bundled stations, parsing and caching on first call
    pub fn stations(&self) -> DatasetResult<Arc<[Station]>> {
        if let Some(cached) = self
            .stations
            .read()
            .map_err(|_| DatasetError::Poisoned)?
            .as_ref()
        {
            return Ok(Arc::clone(cached));
        }

        let parsed = parse_stations(SAMPLE_READINGS_JSON, "sample_readings")?;
        let mut slot = self.stations.write().map_err(|_| DatasetError::Poisoned)?;
        // A racing caller may have filled the slot; keep the first parse
        let entry = slot.get_or_insert(parsed);
        Ok(Arc::clone(entry))
    }

    /// One station by network identifier
    pub fn station(&self, station_id: &str) -> DatasetResult<Station> {
        self.stations()?
            .iter()
            .find(|s| s.station_id == station_id)
            .cloned()
            .ok_or_else(|| DatasetError::UnknownStation(station_id.to_string()))
    }

    /// All district disease baselines, parsing and caching on first call
    pub fn disease_baselines(&self) -> DatasetResult<Arc<[DistrictBaseline]>> {
        if let Some(cached) = self
            .baselines
            .read()
            .map_err(|_| DatasetError::Poisoned)?
            .as_ref()
        {
            return Ok(Arc::clone(cached));
        }

        let index: RawDiseaseIndex = serde_json::from_str(SAMPLE_DISEASE_JSON).map_err(|err| {
            DatasetError::Malformed {
                name: "sample_disease_data",
                detail: err.to_string(),
            }
        })?;

        let parsed: Arc<[DistrictBaseline]> = index.districts.into();
        let mut slot = self.baselines.write().map_err(|_| DatasetError::Poisoned)?;
        let entry = slot.get_or_insert(parsed);
        Ok(Arc::clone(entry))
    }

    /// Baseline for one district, case-insensitive on ASCII
    pub fn disease_baseline(&self, district: &str) -> DatasetResult<Option<DistrictBaseline>> {
        Ok(self
            .disease_baselines()?
            .iter()
            .find(|b| b.district.eq_ignore_ascii_case(district.trim()))
            .cloned())
    }

    /// Drop both caches; the next access re-parses
    pub fn clear(&self) {
        if let Ok(mut slot) = self.stations.write() {
            *slot = None;
        }
        if let Ok(mut slot) = self.baselines.write() {
            *slot = None;
        }
    }
}

impl Default for SampleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a station index document
///
/// Also the entry point for field-collected files loaded from disk;
/// the embedded asset goes through the same path.
pub(crate) fn parse_stations(
    json: &str,
    name: &'static str,
) -> DatasetResult<Arc<[Station]>> {
    let index: RawIndex =
        serde_json::from_str(json).map_err(|err| DatasetError::Malformed {
            name,
            detail: err.to_string(),
        })?;

    Ok(index
        .stations
        .into_iter()
        .map(Station::from_raw)
        .collect::<Vec<_>>()
        .into())
}

/// Load a station index from a file on disk
///
/// Used for field-collected datasets dropped next to the binary; the
/// result is not cached here - feed it to a [`crate::StationStore`].
pub fn load_stations_from_path(path: &std::path::Path) -> DatasetResult<Arc<[Station]>> {
    let json = std::fs::read_to_string(path).map_err(|err| DatasetError::Unreadable {
        name: "station file",
        detail: err.to_string(),
    })?;
    parse_stations(&json, "station file")
}
