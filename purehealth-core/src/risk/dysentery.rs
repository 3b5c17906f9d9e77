//! Dysentery risk scorer
//!
//! Two step tables survive from different screens of the original
//! deployment: a three-band table that only reacts once contamination
//! passes bathing-water limits, and a four-band table with an extra
//! near-clean band below 10 MPN. They disagree by a few points in the
//! middle bands, so both are kept under explicit names.

use crate::constants::risk::{
    DYSENTERY_BANDS_FOUR, DYSENTERY_BANDS_THREE, DYSENTERY_RISK_FOUR_PCT,
    DYSENTERY_RISK_THREE_PCT,
};
use crate::risk::Disease;
use crate::traits::{RiskModel, WaterSample};

use super::utils;

/// Dysentery risk (%) on the coarse three-band table
///
/// Bands: <100 → 5, <500 → 20, <2000 → 45, else 75. Used by the
/// district overview path.
pub fn dysentery_risk_three_band(fecal_coliform: f32) -> f32 {
    utils::step_table(
        fecal_coliform,
        &DYSENTERY_BANDS_THREE,
        &DYSENTERY_RISK_THREE_PCT,
    )
}

/// Dysentery risk (%) on the four-band table
///
/// Bands: <10 → 4, <100 → 12, <500 → 35, else 70. Used by the
/// per-station analysis path and the canonical risk profile.
pub fn dysentery_risk_four_band(fecal_coliform: f32) -> f32 {
    utils::step_table(
        fecal_coliform,
        &DYSENTERY_BANDS_FOUR,
        &DYSENTERY_RISK_FOUR_PCT,
    )
}

/// Dysentery model for the canonical risk profile (four-band table)
#[derive(Debug, Clone, Copy, Default)]
pub struct DysenteryModel;

impl RiskModel for DysenteryModel {
    fn disease(&self) -> Disease {
        Disease::Dysentery
    }

    fn score(&self, sample: &WaterSample) -> f32 {
        dysentery_risk_four_band(sample.fecal_coliform)
    }
}
