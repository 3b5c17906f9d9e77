//! Waterborne Disease Risk Scorers
//!
//! ## Overview
//!
//! One scorer per disease, each a pure step function of contamination
//! indicators. The tables are deliberately coarse: they exist to rank
//! stations and trigger review, not to model transmission dynamics.
//!
//! ## Scoring Layers
//!
//! Every scorer follows the same shape:
//!
//! 1. **Base band** - fecal coliform (MPN/100 mL) selects a base
//!    percentage from an ascending step table.
//! 2. **Secondary modifier** - some diseases multiply the base when a
//!    second indicator (turbidity, WQI) shows degraded water.
//! 3. **Clamp** - results never leave [0, 100].
//!
//! ## Divergent variants
//!
//! The surveillance deployment grew two typhoid modifiers and two
//! dysentery tables at different call sites. They are kept as
//! separately named, separately tested functions rather than silently
//! merged; the canonical profile documents which one it uses. See
//! DESIGN.md for the rationale behind each pick.
//!
//! ## Usage Example
//!
//! ```
//! use purehealth_core::risk::{cholera_risk, risk_profile};
//! use purehealth_core::WaterSample;
//!
//! assert_eq!(cholera_risk(5.0), 2.0);
//!
//! let sample = WaterSample { fecal_coliform: 3000.0, ..WaterSample::default() };
//! let profile = risk_profile(&sample);
//! assert!(profile.iter().all(|r| r.percent <= 100.0));
//! ```

mod cholera;
mod dysentery;
mod hepatitis;
mod typhoid;
mod utils;

pub use cholera::{cholera_risk, CholeraModel};
pub use dysentery::{
    dysentery_risk_four_band, dysentery_risk_three_band, DysenteryModel,
};
pub use hepatitis::{hepatitis_a_risk, HepatitisAModel};
pub use typhoid::{
    typhoid_risk_turbidity_adjusted, typhoid_risk_wqi_adjusted, TyphoidModel,
};

use crate::constants::risk::{
    RISK_LEVEL_HIGH_PCT, RISK_LEVEL_MODERATE_PCT, RISK_LEVEL_SEVERE_PCT,
};
use crate::traits::{RiskModel, WaterSample};

/// The waterborne diseases the engine scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disease {
    /// Vibrio cholerae, acute watery diarrhea
    Cholera = 0,
    /// Salmonella typhi, enteric fever
    Typhoid = 1,
    /// Shigella spp., bacillary dysentery
    Dysentery = 2,
    /// Hepatitis A virus, acute liver infection
    HepatitisA = 3,
}

impl Disease {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Disease::Cholera => "cholera",
            Disease::Typhoid => "typhoid",
            Disease::Dysentery => "dysentery",
            Disease::HepatitisA => "hepatitis_a",
        }
    }
}

/// Display label for a risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Below 10%
    Low = 0,
    /// 10% to 30%
    Moderate = 1,
    /// 30% to 60%
    High = 2,
    /// 60% and above
    Severe = 3,
}

impl RiskLevel {
    /// Map a risk percentage onto its display label
    pub fn from_percent(percent: f32) -> Self {
        if percent < RISK_LEVEL_MODERATE_PCT {
            RiskLevel::Low
        } else if percent < RISK_LEVEL_HIGH_PCT {
            RiskLevel::Moderate
        } else if percent < RISK_LEVEL_SEVERE_PCT {
            RiskLevel::High
        } else {
            RiskLevel::Severe
        }
    }

    /// Get human-readable name
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RiskLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str());
    }
}

/// One disease's scored risk for a sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseRisk {
    /// The disease scored
    pub disease: Disease,
    /// Risk percentage in [0, 100]
    pub percent: f32,
    /// Display label for the percentage
    pub level: RiskLevel,
}

/// Score all four diseases for one sample
///
/// The canonical assessment path: cholera, typhoid with the turbidity
/// modifier, dysentery on the four-band table, hepatitis A. District
/// overview screens that want the three-band dysentery table call it
/// directly.
pub fn risk_profile(sample: &WaterSample) -> [DiseaseRisk; 4] {
    const MODELS: [&dyn RiskModel; 4] = [
        &CholeraModel,
        &TyphoidModel,
        &DysenteryModel,
        &HepatitisAModel,
    ];

    MODELS.map(|model| {
        let percent = model.score(sample);
        DiseaseRisk {
            disease: model.disease(),
            percent,
            level: RiskLevel::from_percent(percent),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_percent(2.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percent(10.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percent(45.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percent(80.0), RiskLevel::Severe);
    }

    #[test]
    fn profile_covers_all_diseases() {
        let profile = risk_profile(&WaterSample::default());
        assert_eq!(profile[0].disease, Disease::Cholera);
        assert_eq!(profile[1].disease, Disease::Typhoid);
        assert_eq!(profile[2].disease, Disease::Dysentery);
        assert_eq!(profile[3].disease, Disease::HepatitisA);
    }

    #[test]
    fn profile_bounded_under_sewage_conditions() {
        let sample = WaterSample {
            fecal_coliform: 1.0e6,
            dissolved_oxygen: 0.5,
            turbidity: 400.0,
            bod: 60.0,
            ..WaterSample::default()
        };
        for risk in risk_profile(&sample) {
            assert!(risk.percent >= 0.0 && risk.percent <= 100.0);
        }
    }
}
