//! Typed records for the bundled datasets
//!
//! The raw files carry ISO-8601 timestamps and the heterogeneous
//! parameter shapes the extractor understands; parsing converts
//! timestamps to epoch milliseconds and hands parameters through
//! untouched as core [`Reading`]s.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use purehealth_core::assessment::HealthRiskAssessment;
use purehealth_core::reading::{ParamValue, Reading};

/// One monitoring station with its curated reading history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Network identifier (e.g. "MH-GODAVARI-01")
    pub station_id: String,
    /// Display name
    pub name: String,
    /// District the station reports under
    pub district: String,
    /// River or water body
    pub river: String,
    /// Readings in chronological order
    pub readings: Vec<Reading>,
}

impl Station {
    /// Most recent reading, if the station has any
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.readings.iter().max_by_key(|r| r.timestamp)
    }

    /// Score the latest reading against this station's district
    pub fn assess_latest(&self) -> Option<HealthRiskAssessment> {
        self.latest_reading()
            .map(|reading| purehealth_core::assess(&reading.sample(), &self.district))
    }
}

/// Annual reported cases per 100k population, by disease
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseBaseline {
    /// Cholera baseline
    pub cholera: f32,
    /// Typhoid baseline
    pub typhoid: f32,
    /// Dysentery baseline
    pub dysentery: f32,
    /// Hepatitis A baseline
    pub hepatitis_a: f32,
}

/// One district's surveillance baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictBaseline {
    /// District name as reported
    pub district: String,
    /// Census headcount used for the per-100k figures
    pub population: u64,
    /// Reported-case baselines
    pub annual_cases_per_100k: DiseaseBaseline,
    /// Year of the last outbreak the bulletins attribute to water
    pub last_reported_outbreak_year: u16,
}

// Raw wire shapes for the embedded files. Timestamps stay strings here;
// conversion happens in from_raw so one bad entry cannot sink the file.

#[derive(Debug, Deserialize)]
pub(crate) struct RawIndex {
    pub stations: Vec<RawStation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStation {
    pub station_id: String,
    pub name: String,
    pub district: String,
    pub river: String,
    pub readings: Vec<RawReading>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReading {
    pub timestamp: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDiseaseIndex {
    pub districts: Vec<DistrictBaseline>,
}

impl Station {
    /// Build a station from its raw form, skipping unparseable entries
    pub(crate) fn from_raw(raw: RawStation) -> Self {
        let mut readings: Vec<Reading> = raw
            .readings
            .into_iter()
            .filter_map(|reading| {
                match DateTime::parse_from_rfc3339(&reading.timestamp) {
                    Ok(ts) => Some(Reading {
                        station_id: raw.station_id.clone(),
                        timestamp: ts.timestamp_millis() as u64,
                        parameters: reading.parameters,
                    }),
                    Err(err) => {
                        log::warn!(
                            "skipping reading with bad timestamp {:?} at station {}: {err}",
                            reading.timestamp,
                            raw.station_id,
                        );
                        None
                    }
                }
            })
            .collect();
        readings.sort_by_key(|r| r.timestamp);

        Self {
            station_id: raw.station_id,
            name: raw.name,
            district: raw.district,
            river: raw.river,
            readings,
        }
    }
}
