//! Property tests for the scoring contracts
//!
//! The engine's promises are simple enough to state exhaustively:
//! monotonicity in contamination, boundedness of every percentage, and
//! a total, non-overlapping classification partition. Proptest sweeps
//! the input space for violations.

use proptest::prelude::*;

use purehealth_core::outbreak::{aggregate, aggregate_with_horizon};
use purehealth_core::risk::{
    cholera_risk, dysentery_risk_four_band, dysentery_risk_three_band, hepatitis_a_risk,
    risk_profile, typhoid_risk_turbidity_adjusted, typhoid_risk_wqi_adjusted,
};
use purehealth_core::wqi::{classify, compute, WqiClass};
use purehealth_core::WaterSample;

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn cholera_monotonic_in_coliform(a in 0.0f32..1.0e7, b in 0.0f32..1.0e7) {
        let (lo, hi) = ordered(a, b);
        prop_assert!(cholera_risk(lo) <= cholera_risk(hi));
    }

    #[test]
    fn typhoid_monotonic_at_fixed_modifiers(
        a in 0.0f32..1.0e7,
        b in 0.0f32..1.0e7,
        turbidity in 0.0f32..500.0,
        wqi in 0.0f32..100.0,
    ) {
        let (lo, hi) = ordered(a, b);
        prop_assert!(
            typhoid_risk_turbidity_adjusted(lo, turbidity)
                <= typhoid_risk_turbidity_adjusted(hi, turbidity)
        );
        prop_assert!(typhoid_risk_wqi_adjusted(lo, wqi) <= typhoid_risk_wqi_adjusted(hi, wqi));
    }

    #[test]
    fn dysentery_monotonic_in_coliform(a in 0.0f32..1.0e7, b in 0.0f32..1.0e7) {
        let (lo, hi) = ordered(a, b);
        prop_assert!(dysentery_risk_three_band(lo) <= dysentery_risk_three_band(hi));
        prop_assert!(dysentery_risk_four_band(lo) <= dysentery_risk_four_band(hi));
    }

    #[test]
    fn hepatitis_monotonic_in_coliform(
        a in 0.0f32..1.0e7,
        b in 0.0f32..1.0e7,
        wqi in 0.0f32..100.0,
    ) {
        let (lo, hi) = ordered(a, b);
        prop_assert!(hepatitis_a_risk(lo, wqi) <= hepatitis_a_risk(hi, wqi));
    }

    #[test]
    fn every_risk_bounded(
        fc in -1.0e9f32..1.0e9,
        turbidity in -100.0f32..1.0e4,
        wqi in -50.0f32..150.0,
    ) {
        for risk in [
            cholera_risk(fc),
            typhoid_risk_turbidity_adjusted(fc, turbidity),
            typhoid_risk_wqi_adjusted(fc, wqi),
            dysentery_risk_three_band(fc),
            dysentery_risk_four_band(fc),
            hepatitis_a_risk(fc, wqi),
        ] {
            prop_assert!((0.0..=100.0).contains(&risk));
        }
    }

    #[test]
    fn outbreak_bounded_and_labeled(
        wqi in -50.0f32..150.0,
        fc in -1.0e9f32..1.0e9,
        do_ in -10.0f32..50.0,
        days in 0.0f32..365.0,
    ) {
        let p = aggregate(wqi, fc, do_);
        prop_assert!((0.0..=100.0).contains(&p.score));

        let scaled = aggregate_with_horizon(wqi, fc, do_, days);
        prop_assert!((0.0..=100.0).contains(&scaled.score));
    }

    #[test]
    fn classification_is_a_total_partition(wqi in 0.0f32..=100.0) {
        let class = classify(wqi);
        let expected = if wqi >= 90.0 {
            WqiClass::A
        } else if wqi >= 70.0 {
            WqiClass::B
        } else if wqi >= 50.0 {
            WqiClass::C
        } else if wqi >= 25.0 {
            WqiClass::D
        } else {
            WqiClass::E
        };
        prop_assert_eq!(class, expected);
    }

    #[test]
    fn composite_wqi_bounded(
        ph in -5.0f32..20.0,
        bod in -10.0f32..1.0e4,
        do_ in -10.0f32..50.0,
        fc in -1.0e6f32..1.0e9,
        turbidity in 0.0f32..1000.0,
    ) {
        let sample = WaterSample {
            ph,
            bod,
            dissolved_oxygen: do_,
            fecal_coliform: fc,
            turbidity,
            ..WaterSample::default()
        };
        let wqi = compute(&sample);
        prop_assert!((0.0..=100.0).contains(&wqi));

        for risk in risk_profile(&sample) {
            prop_assert!((0.0..=100.0).contains(&risk.percent));
        }
    }
}
