//! Typhoid risk scorer
//!
//! Salmonella typhi rides fecal contamination like cholera, but two
//! deployment variants grew different secondary modifiers: one scales
//! the base when turbidity shields the pathogen from disinfection, the
//! other when the composite WQI shows broadly degraded water. Both are
//! kept; they are NOT interchangeable because WQI already embeds the
//! coliform count the base band was selected from.

use crate::constants::risk::{
    LOW_WQI_THRESHOLD, TYPHOID_BANDS, TYPHOID_RISK_PCT, TYPHOID_TURBIDITY_FACTOR,
    TYPHOID_TURBIDITY_NTU, TYPHOID_WQI_FACTOR,
};
use crate::risk::Disease;
use crate::traits::{RiskModel, WaterSample};

use super::utils;

/// Typhoid base risk (%) from fecal coliform (MPN/100 mL)
///
/// Bands: <10 → 5, <100 → 15, <500 → 35, else 60.
fn typhoid_base(fecal_coliform: f32) -> f32 {
    utils::step_table(fecal_coliform, &TYPHOID_BANDS, &TYPHOID_RISK_PCT)
}

/// Typhoid risk (%) with the turbidity modifier
///
/// Base × 1.3 when turbidity exceeds 10 NTU, clamped to [0, 100].
/// This is the variant the canonical risk profile uses.
pub fn typhoid_risk_turbidity_adjusted(fecal_coliform: f32, turbidity: f32) -> f32 {
    let mut risk = typhoid_base(fecal_coliform);
    if turbidity > TYPHOID_TURBIDITY_NTU {
        risk *= TYPHOID_TURBIDITY_FACTOR;
    }
    utils::clamp_percent(risk)
}

/// Typhoid risk (%) with the WQI modifier
///
/// Base × 1.5 when WQI falls below 50, clamped to [0, 100]. Kept for
/// callers that only have the composite index, not raw turbidity.
pub fn typhoid_risk_wqi_adjusted(fecal_coliform: f32, wqi: f32) -> f32 {
    let mut risk = typhoid_base(fecal_coliform);
    if wqi < LOW_WQI_THRESHOLD {
        risk *= TYPHOID_WQI_FACTOR;
    }
    utils::clamp_percent(risk)
}

/// Typhoid model for the canonical risk profile (turbidity variant)
#[derive(Debug, Clone, Copy, Default)]
pub struct TyphoidModel;

impl RiskModel for TyphoidModel {
    fn disease(&self) -> Disease {
        Disease::Typhoid
    }

    fn score(&self, sample: &WaterSample) -> f32 {
        typhoid_risk_turbidity_adjusted(sample.fecal_coliform, sample.turbidity)
    }
}
