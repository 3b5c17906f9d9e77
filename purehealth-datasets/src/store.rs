//! In-memory station history store
//!
//! The device-local answer to "what did this station read lately":
//! a keyed store over chronologically sorted readings, seeded from the
//! bundled samples or appended to by a live collector. Queries hand
//! back owned vectors - histories are small (tens of readings) and the
//! callers are render paths that want detached data.

use std::collections::HashMap;
use std::sync::RwLock;

use purehealth_core::reading::Reading;
use purehealth_core::time::Timestamp;

use crate::registry::SampleRegistry;
use crate::DatasetResult;

/// Keyed store of per-station reading history
pub struct StationStore {
    readings: RwLock<HashMap<String, Vec<Reading>>>,
}

impl StationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-filled with the registry's bundled readings
    pub fn seeded_from(registry: &SampleRegistry) -> DatasetResult<Self> {
        let store = Self::new();
        for station in registry.stations()?.iter() {
            for reading in &station.readings {
                store.insert(reading.clone());
            }
        }
        Ok(store)
    }

    /// Append one reading, keeping the station's history sorted
    pub fn insert(&self, reading: Reading) {
        let mut map = match self.readings.write() {
            Ok(map) => map,
            // A poisoned store only loses the in-flight insert
            Err(poisoned) => poisoned.into_inner(),
        };
        let history = map.entry(reading.station_id.clone()).or_default();
        let position = history
            .binary_search_by_key(&reading.timestamp, |r| r.timestamp)
            .unwrap_or_else(|insert_at| insert_at);
        history.insert(position, reading);
    }

    /// Full chronological history for a station; empty if unknown
    pub fn station_history(&self, station_id: &str) -> Vec<Reading> {
        match self.readings.read() {
            Ok(map) => map.get(station_id).cloned().unwrap_or_default(),
            Err(poisoned) => poisoned
                .into_inner()
                .get(station_id)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Readings with `start <= timestamp < end`; empty if unknown
    pub fn readings_in_range(
        &self,
        station_id: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Vec<Reading> {
        self.station_history(station_id)
            .into_iter()
            .filter(|r| r.timestamp >= start && r.timestamp < end)
            .collect()
    }

    /// Station ids currently held, in no particular order
    pub fn station_ids(&self) -> Vec<String> {
        match self.readings.read() {
            Ok(map) => map.keys().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().keys().cloned().collect(),
        }
    }

    /// Drop all held readings
    pub fn clear(&self) {
        if let Ok(mut map) = self.readings.write() {
            map.clear();
        }
    }
}

impl Default for StationStore {
    fn default() -> Self {
        Self::new()
    }
}
