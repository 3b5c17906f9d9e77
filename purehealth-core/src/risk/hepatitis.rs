//! Hepatitis A risk scorer
//!
//! HAV travels in fecal matter but survives treatment better than the
//! bacterial diseases, so the base bands are wider and the score scales
//! up when the composite WQI shows broadly degraded water.

use crate::constants::risk::{
    HEPATITIS_BANDS, HEPATITIS_RISK_PCT, HEPATITIS_WQI_FACTOR, LOW_WQI_THRESHOLD,
};
use crate::risk::Disease;
use crate::traits::{RiskModel, WaterSample};

use super::utils;

/// Hepatitis A risk (%) from fecal coliform and WQI
///
/// Bands: <100 → 3, <1000 → 12, else 30; × 1.5 when WQI < 50,
/// clamped to [0, 100].
pub fn hepatitis_a_risk(fecal_coliform: f32, wqi: f32) -> f32 {
    let mut risk = utils::step_table(fecal_coliform, &HEPATITIS_BANDS, &HEPATITIS_RISK_PCT);
    if wqi < LOW_WQI_THRESHOLD {
        risk *= HEPATITIS_WQI_FACTOR;
    }
    utils::clamp_percent(risk)
}

/// Hepatitis A model for the canonical risk profile
///
/// Derives the WQI modifier from the sample's own composite index.
#[derive(Debug, Clone, Copy, Default)]
pub struct HepatitisAModel;

impl RiskModel for HepatitisAModel {
    fn disease(&self) -> Disease {
        Disease::HepatitisA
    }

    fn score(&self, sample: &WaterSample) -> f32 {
        hepatitis_a_risk(sample.fecal_coliform, crate::wqi::compute(sample))
    }
}
