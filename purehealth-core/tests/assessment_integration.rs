//! End-to-end scoring scenarios
//!
//! Exercises the raw-JSON-to-assessment path the app actually takes:
//! heterogeneous reading in, flattened sample, full report out. The
//! concrete numbers pin the documented band tables.

use purehealth_core::outbreak::aggregate;
use purehealth_core::risk::{
    cholera_risk, dysentery_risk_four_band, dysentery_risk_three_band,
    typhoid_risk_turbidity_adjusted, Disease, RiskLevel,
};
use purehealth_core::wqi::{classify, WqiClass};
use purehealth_core::{assess, district_population, estimate_cases, Reading};

fn reading(json: &str) -> Reading {
    serde_json::from_str(json).expect("test reading parses")
}

#[test]
fn near_clean_versus_sewage_banding() {
    // fc = 5: every scorer sits in its lowest band
    assert_eq!(cholera_risk(5.0), 2.0);
    assert_eq!(typhoid_risk_turbidity_adjusted(5.0, 1.0), 5.0);
    assert_eq!(dysentery_risk_four_band(5.0), 4.0);

    // fc = 3000: every scorer sits in its top band
    assert_eq!(cholera_risk(3000.0), 80.0);
    assert_eq!(dysentery_risk_three_band(3000.0), 75.0);
    assert_eq!(dysentery_risk_four_band(3000.0), 70.0);

    // Strict ordering between the scenarios
    assert!(cholera_risk(5.0) < cholera_risk(3000.0));
    assert!(dysentery_risk_four_band(5.0) < dysentery_risk_four_band(3000.0));
}

#[test]
fn classification_boundaries_exact() {
    assert_eq!(classify(95.0), WqiClass::A);
    assert_eq!(classify(90.0), WqiClass::A);
    assert_eq!(classify(89.9), WqiClass::B);
}

#[test]
fn class_labels_render() {
    assert_eq!(classify(95.0).as_char(), 'A');
    assert!(classify(95.0).description().starts_with("excellent"));
    assert!(classify(30.0).description().starts_with("poor"));
}

#[test]
fn additive_aggregate_worst_case_scenario() {
    let p = aggregate(20.0, 3000.0, 3.0);
    assert_eq!(p.score, 85.0);
    assert_eq!(p.level.as_str(), "high");
}

#[test]
fn unknown_district_falls_back() {
    assert_eq!(district_population("UnknownDistrict"), 2_000_000);
}

#[test]
fn mixed_shape_reading_assesses_end_to_end() {
    // One reading mixing all three feed shapes, contaminated enough to
    // push every indicator band
    let r = reading(
        r#"{
            "stationId": "MH-GODAVARI-04",
            "timestamp": 1717200000000,
            "parameters": {
                "pH": "6.3",
                "BOD": {"value": 16, "unit": "mg/L", "status": "measured"},
                "dissolvedOxygen": 3.2,
                "fecalColiform": {"value": "2800", "unit": "MPN/100mL"},
                "turbidity": 35.5
            }
        }"#,
    );

    let sample = r.sample();
    assert_eq!(sample.fecal_coliform, 2800.0);
    assert_eq!(sample.bod, 16.0);

    let report = assess(&sample, "Nashik");

    // fc 2800 tops every table; turbidity modifier active
    assert_eq!(report.disease_risks[0].percent, 80.0);
    assert_eq!(report.disease_risks[0].level, RiskLevel::Severe);
    assert_eq!(report.worst_disease_risk().disease, Disease::Cholera);

    // WQI bands: degraded but not sewage-grade
    assert!(report.wqi < 50.0);

    // +25 (WQI < 50) +30 (fc > 2500) +15 (DO < 4) = 70
    assert_eq!(report.outbreak.score, 70.0);

    // Nashik: 6.1M × 15% affected, 2% attack rate at score 70
    assert_eq!(report.affected_population, 915_000);
    assert_eq!(report.estimated_cases, 18_300);
}

#[test]
fn half_empty_reading_never_alarms() {
    let r = reading(
        r#"{"stationId": "MH-KRISHNA-11", "timestamp": 1717200000000,
            "parameters": {"turbidity": {"unit": "NTU"}}}"#,
    );

    let report = assess(&r.sample(), "Sangli");
    assert_eq!(report.wqi_class, WqiClass::B);
    assert_eq!(report.outbreak.score, 0.0);
    // Default coliform (10 MPN) leaves typhoid at its 15% band, so
    // "no alarm" means nothing past Moderate
    assert!(report
        .disease_risks
        .iter()
        .all(|risk| risk.level <= RiskLevel::Moderate));
}

#[test]
fn case_estimation_tracks_score_bands() {
    let headcount = estimate_cases(1_000_000, 85.0);
    assert_eq!(headcount, 50_000);
    assert_eq!(estimate_cases(1_000_000, 10.0), 2_000);
}
