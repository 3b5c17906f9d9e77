//! Water Quality Index classification and computation
//!
//! Two halves: `classify` maps an index onto the CPCB designated-best-use
//! classes A-E, and `compute` produces the index itself from pH, dissolved
//! oxygen, BOD, and fecal coliform using simplified NSF-style rating
//! curves with fixed weights.
//!
//! `classify` is total over the whole real line - producers are expected
//! to clamp to [0, 100], but an out-of-range index still lands in the
//! nearest class rather than erroring.

use crate::constants::water::{
    DEFAULT_PH, WQI_BOD_ZERO_MG_L, WQI_CLASS_A_MIN, WQI_CLASS_B_MIN, WQI_CLASS_C_MIN,
    WQI_CLASS_D_MIN, WQI_DO_FULL_MG_L, WQI_FC_ZERO_LOG10, WQI_PH_ZERO_SPAN, WQI_WEIGHT_BOD,
    WQI_WEIGHT_DO, WQI_WEIGHT_FC, WQI_WEIGHT_PH,
};
use crate::traits::WaterSample;

/// CPCB designated-best-use class for a WQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WqiClass {
    /// WQI >= 90: drinking water source without conventional treatment
    A = 0,
    /// WQI >= 70: outdoor bathing
    B = 1,
    /// WQI >= 50: drinking water source after conventional treatment
    C = 2,
    /// WQI >= 25: propagation of wildlife and fisheries
    D = 3,
    /// Below 25: irrigation, industrial cooling, controlled waste disposal
    E = 4,
}

impl WqiClass {
    /// Single-letter class label
    pub const fn as_char(&self) -> char {
        match self {
            WqiClass::A => 'A',
            WqiClass::B => 'B',
            WqiClass::C => 'C',
            WqiClass::D => 'D',
            WqiClass::E => 'E',
        }
    }

    /// Designated-best-use description shown alongside the class
    pub const fn description(&self) -> &'static str {
        match self {
            WqiClass::A => "excellent, drinkable without treatment",
            WqiClass::B => "good, bathing acceptable",
            WqiClass::C => "moderate, conventional treatment required",
            WqiClass::D => "poor, fish and wildlife only",
            WqiClass::E => "very poor, irrigation and industrial only",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WqiClass {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "class {}", self.as_char());
    }
}

/// Classify a WQI value into its CPCB class
///
/// Inclusive lower bounds: 90, 70, 50, 25. Total over every finite
/// float; NaN falls through to class E, matching the engine-wide rule
/// that pathological inputs read as worst-case water.
pub fn classify(wqi: f32) -> WqiClass {
    if wqi >= WQI_CLASS_A_MIN {
        WqiClass::A
    } else if wqi >= WQI_CLASS_B_MIN {
        WqiClass::B
    } else if wqi >= WQI_CLASS_C_MIN {
        WqiClass::C
    } else if wqi >= WQI_CLASS_D_MIN {
        WqiClass::D
    } else {
        WqiClass::E
    }
}

/// Compute the composite WQI for a sample, clamped to [0, 100]
///
/// Weighted sum of four 0-100 parameter ratings. Non-finite parameters
/// are replaced by their documented defaults first, so the result is
/// always a real number in range.
pub fn compute(sample: &WaterSample) -> f32 {
    let sample = sample.sanitized();

    let q = WQI_WEIGHT_PH * rate_ph(sample.ph)
        + WQI_WEIGHT_DO * rate_dissolved_oxygen(sample.dissolved_oxygen)
        + WQI_WEIGHT_BOD * rate_bod(sample.bod)
        + WQI_WEIGHT_FC * rate_fecal_coliform(sample.fecal_coliform);

    q.clamp(0.0, 100.0)
}

/// pH rating: 100 at neutral, falling linearly to 0 at pH 4 and 10
fn rate_ph(ph: f32) -> f32 {
    let deviation = (ph - DEFAULT_PH).abs();
    (100.0 * (1.0 - deviation / WQI_PH_ZERO_SPAN)).clamp(0.0, 100.0)
}

/// DO rating: linear from 0 at anoxic to 100 at near-saturation
fn rate_dissolved_oxygen(do_mg_l: f32) -> f32 {
    (100.0 * do_mg_l / WQI_DO_FULL_MG_L).clamp(0.0, 100.0)
}

/// BOD rating: 100 at zero demand, 0 at the discharge standard
fn rate_bod(bod_mg_l: f32) -> f32 {
    (100.0 * (1.0 - bod_mg_l / WQI_BOD_ZERO_MG_L)).clamp(0.0, 100.0)
}

/// Coliform rating: log-scale, 100 at <= 1 MPN, 0 at 10^5 MPN
fn rate_fecal_coliform(fc_mpn: f32) -> f32 {
    if fc_mpn <= 1.0 {
        return 100.0;
    }
    let magnitude = libm::log10f(fc_mpn);
    (100.0 * (1.0 - magnitude / WQI_FC_ZERO_LOG10)).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify(95.0), WqiClass::A);
        assert_eq!(classify(90.0), WqiClass::A);
        assert_eq!(classify(89.9), WqiClass::B);
        assert_eq!(classify(70.0), WqiClass::B);
        assert_eq!(classify(50.0), WqiClass::C);
        assert_eq!(classify(25.0), WqiClass::D);
        assert_eq!(classify(24.9), WqiClass::E);
    }

    #[test]
    fn classify_is_total_outside_range() {
        assert_eq!(classify(120.0), WqiClass::A);
        assert_eq!(classify(-10.0), WqiClass::E);
        assert_eq!(classify(f32::NAN), WqiClass::E);
    }

    #[test]
    fn clean_river_scores_high() {
        let sample = WaterSample {
            ph: 7.2,
            bod: 1.0,
            dissolved_oxygen: 7.5,
            fecal_coliform: 4.0,
            ..WaterSample::default()
        };
        let wqi = compute(&sample);
        assert!(wqi > 80.0, "clean river WQI was {wqi}");
    }

    #[test]
    fn raw_sewage_scores_low() {
        let sample = WaterSample {
            ph: 6.0,
            bod: 25.0,
            dissolved_oxygen: 1.0,
            fecal_coliform: 50_000.0,
            ..WaterSample::default()
        };
        let wqi = compute(&sample);
        assert!(wqi < 30.0, "sewage WQI was {wqi}");
        assert_eq!(classify(wqi), WqiClass::E);
    }

    #[test]
    fn compute_always_in_range() {
        let extremes = [
            WaterSample { ph: -4.0, bod: 1.0e6, dissolved_oxygen: -3.0, fecal_coliform: 1.0e9, ..WaterSample::default() },
            WaterSample { ph: 14.0, bod: 0.0, dissolved_oxygen: 100.0, fecal_coliform: 0.0, ..WaterSample::default() },
            WaterSample { ph: f32::NAN, bod: f32::INFINITY, ..WaterSample::default() },
        ];
        for sample in extremes {
            let wqi = compute(&sample);
            assert!((0.0..=100.0).contains(&wqi));
        }
    }

    #[test]
    fn default_parameters_classify_as_bathing_grade() {
        // The documented defaults describe unremarkable surface water;
        // they must not classify as pristine or as alarming.
        let wqi = compute(&WaterSample::default());
        assert_eq!(classify(wqi), WqiClass::B);
    }
}
