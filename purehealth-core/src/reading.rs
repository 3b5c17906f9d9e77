//! Heterogeneous reading representations and parameter extraction
//!
//! Station data arrives in three shapes depending on the source: the
//! live sensor feed sends flat numbers, the bundled sample files wrap
//! each parameter in a `{value, unit, status}` record, and the analysis
//! backend echoes numbers back as strings. Extraction flattens all of
//! them into plain floats with documented defaults so the scoring
//! engine never sees the difference.
//!
//! Extraction is total by contract: a missing key, a non-numeric
//! string, NaN, or a record without a usable `value` all resolve to the
//! caller's default. Nothing here returns a `Result` and nothing
//! panics; a malformed parameter that was present is logged at `warn`
//! so feed regressions stay visible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::water::{
    DEFAULT_BOD_MG_L, DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_FECAL_COLIFORM_MPN, DEFAULT_PH,
    DEFAULT_TEMPERATURE_C, DEFAULT_TURBIDITY_NTU,
};
use crate::time::Timestamp;
use crate::traits::WaterSample;

/// A bare numeric value that may arrive stringified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Plain JSON number
    Number(f64),
    /// Number encoded as a string ("7.2")
    Text(String),
}

impl Scalar {
    fn as_f32(&self) -> Option<f32> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n as f32),
            Scalar::Number(_) => None,
            Scalar::Text(s) => s.trim().parse::<f32>().ok().filter(|v| v.is_finite()),
        }
    }
}

/// One parameter value in any of the shapes the feeds produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Flat number (live sensor feed)
    Number(f64),
    /// Stringified number (backend echo)
    Text(String),
    /// Nested record (bundled sample files)
    Record {
        /// The measurement itself, possibly stringified
        #[serde(default)]
        value: Option<Scalar>,
        /// Unit label, carried for display only
        #[serde(default)]
        unit: Option<String>,
        /// Feed-side quality flag, carried for display only
        #[serde(default)]
        status: Option<String>,
    },
}

impl ParamValue {
    /// Coerce to a finite float if the shape allows it
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            ParamValue::Number(n) if n.is_finite() => Some(*n as f32),
            ParamValue::Number(_) => None,
            ParamValue::Text(s) => s.trim().parse::<f32>().ok().filter(|v| v.is_finite()),
            ParamValue::Record { value: Some(scalar), .. } => scalar.as_f32(),
            ParamValue::Record { value: None, .. } => None,
        }
    }
}

/// Extract a parameter as a float, falling back to `default`
///
/// The load-bearing promise of this module: absent keys and
/// uncoercible values both resolve to `default`, and no input raises.
pub fn extract(parameters: &BTreeMap<String, ParamValue>, key: &str, default: f32) -> f32 {
    match parameters.get(key) {
        None => default,
        Some(value) => value.as_f32().unwrap_or_else(|| {
            log::warn!("parameter {key:?} present but not numeric; using default {default}");
            default
        }),
    }
}

/// A timestamped set of named water-quality parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Monitoring station that produced the reading
    #[serde(rename = "stationId", alias = "station_id")]
    pub station_id: String,

    /// Capture time in milliseconds since epoch
    pub timestamp: Timestamp,

    /// Named parameters in any supported shape
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

/// Key aliases per canonical parameter, checked in order
///
/// The live feed uses camelCase, older sample files snake_case, and the
/// chemistry keys show up uppercased in lab exports.
const PH_KEYS: &[&str] = &["ph", "pH"];
const BOD_KEYS: &[&str] = &["bod", "BOD"];
const DO_KEYS: &[&str] = &["dissolvedOxygen", "dissolved_oxygen", "DO"];
const FC_KEYS: &[&str] = &["fecalColiform", "fecal_coliform"];
const TURBIDITY_KEYS: &[&str] = &["turbidity"];
const TEMPERATURE_KEYS: &[&str] = &["temperature", "waterTemperature"];

impl Reading {
    /// Extract one parameter by exact key
    pub fn param(&self, key: &str, default: f32) -> f32 {
        extract(&self.parameters, key, default)
    }

    /// Flatten into the plain sample the scoring engine consumes
    ///
    /// Each canonical parameter is looked up under its known aliases;
    /// whatever is still missing gets its documented default.
    pub fn sample(&self) -> WaterSample {
        WaterSample {
            ph: self.first_param(PH_KEYS, DEFAULT_PH),
            bod: self.first_param(BOD_KEYS, DEFAULT_BOD_MG_L),
            dissolved_oxygen: self.first_param(DO_KEYS, DEFAULT_DISSOLVED_OXYGEN_MG_L),
            fecal_coliform: self.first_param(FC_KEYS, DEFAULT_FECAL_COLIFORM_MPN),
            turbidity: self.first_param(TURBIDITY_KEYS, DEFAULT_TURBIDITY_NTU),
            temperature: self.first_param(TEMPERATURE_KEYS, DEFAULT_TEMPERATURE_C),
        }
    }

    fn first_param(&self, keys: &[&str], default: f32) -> f32 {
        keys.iter()
            .find_map(|key| self.parameters.get(*key).and_then(ParamValue::as_f32))
            .unwrap_or(default)
    }
}
