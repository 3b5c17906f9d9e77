//! One-call health risk assessment
//!
//! Composes the whole engine - composite WQI, classification, the four
//! disease scorers, outbreak aggregation, and population impact - into
//! the single structure a station detail view or an analysis request
//! renders from. Computed fresh per call; nothing is cached or shared.

use crate::impact::{estimate_affected, estimate_cases};
use crate::outbreak::{aggregate, OutbreakProbability};
use crate::risk::{risk_profile, DiseaseRisk};
use crate::traits::WaterSample;
use crate::wqi::{classify, compute, WqiClass};

/// Full scored picture of one sample at one district
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthRiskAssessment {
    /// Composite WQI in [0, 100]
    pub wqi: f32,
    /// CPCB class for the index
    pub wqi_class: WqiClass,
    /// Per-disease risks (cholera, typhoid, dysentery, hepatitis A)
    pub disease_risks: [DiseaseRisk; 4],
    /// Aggregated outbreak probability
    pub outbreak: OutbreakProbability,
    /// Headcount drawing on the monitored source
    pub affected_population: u64,
    /// Expected cases at the current outbreak score
    pub estimated_cases: u64,
}

impl HealthRiskAssessment {
    /// Highest single disease risk in the profile
    pub fn worst_disease_risk(&self) -> &DiseaseRisk {
        self.disease_risks
            .iter()
            .reduce(|worst, risk| if risk.percent > worst.percent { risk } else { worst })
            .expect("profile always holds four diseases")
    }
}

/// Score one sample against one district
///
/// Total like everything beneath it: pathological samples degrade to
/// defaults, unknown districts to the fallback headcount.
pub fn assess(sample: &WaterSample, district: &str) -> HealthRiskAssessment {
    let sample = sample.sanitized();

    let wqi = compute(&sample);
    let outbreak = aggregate(wqi, sample.fecal_coliform, sample.dissolved_oxygen);
    let affected = estimate_affected(district);

    HealthRiskAssessment {
        wqi,
        wqi_class: classify(wqi),
        disease_risks: risk_profile(&sample),
        outbreak,
        affected_population: affected,
        estimated_cases: estimate_cases(affected, outbreak.score),
    }
}
