//! Core traits and the sample type the scorers consume
//!
//! These define the interface every disease model implements. Keep them
//! simple - the scorers are pure functions over a handful of floats.

use crate::constants::water::{
    DEFAULT_BOD_MG_L, DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_FECAL_COLIFORM_MPN, DEFAULT_PH,
    DEFAULT_TEMPERATURE_C, DEFAULT_TURBIDITY_NTU,
};
use crate::risk::{Disease, RiskLevel};

/// One station reading reduced to plain numeric parameters
///
/// This is the whole input contract of the scoring engine: however a
/// reading arrived (flat numbers, nested records, stringified values),
/// it is flattened into this struct before anything is scored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterSample {
    /// pH in pH units
    pub ph: f32,

    /// Biological oxygen demand in mg/L
    pub bod: f32,

    /// Dissolved oxygen in mg/L
    pub dissolved_oxygen: f32,

    /// Fecal coliform in MPN/100 mL
    pub fecal_coliform: f32,

    /// Turbidity in NTU
    pub turbidity: f32,

    /// Water temperature in °C
    pub temperature: f32,
}

impl Default for WaterSample {
    fn default() -> Self {
        Self {
            ph: DEFAULT_PH,
            bod: DEFAULT_BOD_MG_L,
            dissolved_oxygen: DEFAULT_DISSOLVED_OXYGEN_MG_L,
            fecal_coliform: DEFAULT_FECAL_COLIFORM_MPN,
            turbidity: DEFAULT_TURBIDITY_NTU,
            temperature: DEFAULT_TEMPERATURE_C,
        }
    }
}

impl WaterSample {
    /// Replace non-finite fields with their documented defaults
    ///
    /// Scoring never rejects a sample; NaN or infinite values degrade
    /// the same way a missing parameter does.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.ph.is_finite() {
            self.ph = defaults.ph;
        }
        if !self.bod.is_finite() {
            self.bod = defaults.bod;
        }
        if !self.dissolved_oxygen.is_finite() {
            self.dissolved_oxygen = defaults.dissolved_oxygen;
        }
        if !self.fecal_coliform.is_finite() {
            self.fecal_coliform = defaults.fecal_coliform;
        }
        if !self.turbidity.is_finite() {
            self.turbidity = defaults.turbidity;
        }
        if !self.temperature.is_finite() {
            self.temperature = defaults.temperature;
        }
        self
    }
}

/// Disease risk model - implement this for each waterborne disease
pub trait RiskModel {
    /// The disease this model scores
    fn disease(&self) -> Disease;

    /// Risk percentage in [0, 100] for the given sample
    fn score(&self, sample: &WaterSample) -> f32;

    /// Display label derived from the score
    fn level(&self, sample: &WaterSample) -> RiskLevel {
        RiskLevel::from_percent(self.score(sample))
    }
}
