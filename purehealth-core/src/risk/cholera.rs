//! Cholera risk scorer
//!
//! Vibrio cholerae tracks fecal contamination directly, so the score is
//! a single step function of fecal coliform with no secondary modifier.

use crate::constants::risk::{CHOLERA_RISK_PCT, FC_BANDS_FINE};
use crate::risk::Disease;
use crate::traits::{RiskModel, WaterSample};

use super::utils;

/// Cholera risk (%) from fecal coliform (MPN/100 mL)
///
/// Bands: <10 → 2, <100 → 8, <500 → 25, <2000 → 50, else 80.
pub fn cholera_risk(fecal_coliform: f32) -> f32 {
    utils::step_table(fecal_coliform, &FC_BANDS_FINE, &CHOLERA_RISK_PCT)
}

/// Cholera model for the canonical risk profile
#[derive(Debug, Clone, Copy, Default)]
pub struct CholeraModel;

impl RiskModel for CholeraModel {
    fn disease(&self) -> Disease {
        Disease::Cholera
    }

    fn score(&self, sample: &WaterSample) -> f32 {
        cholera_risk(sample.fecal_coliform)
    }
}
