//! Outbreak probability aggregation
//!
//! Combines the three indicators that move together during a
//! contamination event - composite WQI, fecal coliform, dissolved
//! oxygen - into one bounded score with a discrete severity level.
//!
//! Two variants exist and must not be conflated:
//! - [`aggregate`]: the additive 30-day score used everywhere a single
//!   number is shown.
//! - [`aggregate_with_horizon`]: the time-scaled estimate for shorter
//!   planning windows (a 7-day horizon is roughly half the 30-day one).

use crate::constants::risk::{
    OUTBREAK_DO_BANDS, OUTBREAK_DO_POINTS, OUTBREAK_FC_BANDS, OUTBREAK_FC_POINTS,
    OUTBREAK_HORIZON_REF_DAYS, OUTBREAK_LEVEL_BOUNDS, OUTBREAK_WQI_BANDS, OUTBREAK_WQI_POINTS,
};

/// Discrete severity for an outbreak score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutbreakLevel {
    /// Score below 5
    VeryLow = 0,
    /// Score 5 to 15
    Low = 1,
    /// Score 15 to 40
    Medium = 2,
    /// Score 40 and above
    High = 3,
}

impl OutbreakLevel {
    /// Map a score onto the canonical four-band severity
    pub fn from_score(score: f32) -> Self {
        if score < OUTBREAK_LEVEL_BOUNDS[0] {
            OutbreakLevel::VeryLow
        } else if score < OUTBREAK_LEVEL_BOUNDS[1] {
            OutbreakLevel::Low
        } else if score < OUTBREAK_LEVEL_BOUNDS[2] {
            OutbreakLevel::Medium
        } else {
            OutbreakLevel::High
        }
    }

    /// Get human-readable name
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutbreakLevel::VeryLow => "very_low",
            OutbreakLevel::Low => "low",
            OutbreakLevel::Medium => "medium",
            OutbreakLevel::High => "high",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutbreakLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str());
    }
}

/// Legacy three-band severity label
///
/// Older district-trend screens rendered only three colors, with the
/// same low cut-points the four-band mapping extends. Kept so those
/// callers keep their exact labels.
pub fn severity_three_band(score: f32) -> &'static str {
    if score < OUTBREAK_LEVEL_BOUNDS[0] {
        "low"
    } else if score < OUTBREAK_LEVEL_BOUNDS[1] {
        "medium"
    } else {
        "high"
    }
}

/// Aggregated outbreak probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutbreakProbability {
    /// Score in [0, 100]
    pub score: f32,
    /// Canonical four-band severity for the score
    pub level: OutbreakLevel,
}

/// Additive outbreak score from WQI, fecal coliform, and DO
///
/// Each indicator contributes points by band (WQI up to 40, coliform up
/// to 30, DO up to 15); the total is clamped to [0, 100]. All band
/// checks are one-sided comparisons, so negative or absurd inputs fall
/// into some band rather than erroring.
pub fn aggregate(wqi: f32, fecal_coliform: f32, dissolved_oxygen: f32) -> OutbreakProbability {
    let mut score = 0.0;

    if wqi < OUTBREAK_WQI_BANDS[0] {
        score += OUTBREAK_WQI_POINTS[0];
    } else if wqi < OUTBREAK_WQI_BANDS[1] {
        score += OUTBREAK_WQI_POINTS[1];
    } else if wqi < OUTBREAK_WQI_BANDS[2] {
        score += OUTBREAK_WQI_POINTS[2];
    }

    if fecal_coliform > OUTBREAK_FC_BANDS[0] {
        score += OUTBREAK_FC_POINTS[0];
    } else if fecal_coliform > OUTBREAK_FC_BANDS[1] {
        score += OUTBREAK_FC_POINTS[1];
    } else if fecal_coliform > OUTBREAK_FC_BANDS[2] {
        score += OUTBREAK_FC_POINTS[2];
    }

    if dissolved_oxygen < OUTBREAK_DO_BANDS[0] {
        score += OUTBREAK_DO_POINTS[0];
    } else if dissolved_oxygen < OUTBREAK_DO_BANDS[1] {
        score += OUTBREAK_DO_POINTS[1];
    }

    let score = score.clamp(0.0, 100.0);
    OutbreakProbability {
        score,
        level: OutbreakLevel::from_score(score),
    }
}

/// Time-scaled outbreak score for a planning horizon in days
///
/// The additive aggregate is calibrated as a 30-day estimate; shorter
/// horizons scale it by sqrt(days/30), so 7 days comes out at roughly
/// half. Non-positive horizons read as zero probability.
pub fn aggregate_with_horizon(
    wqi: f32,
    fecal_coliform: f32,
    dissolved_oxygen: f32,
    days: f32,
) -> OutbreakProbability {
    let base = aggregate(wqi, fecal_coliform, dissolved_oxygen);

    if days <= 0.0 {
        return OutbreakProbability {
            score: 0.0,
            level: OutbreakLevel::VeryLow,
        };
    }

    let factor = libm::sqrtf(days / OUTBREAK_HORIZON_REF_DAYS);
    let score = (base.score * factor).clamp(0.0, 100.0);
    OutbreakProbability {
        score,
        level: OutbreakLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_bands_sum_to_85() {
        let p = aggregate(20.0, 3000.0, 3.0);
        assert_eq!(p.score, 85.0);
        assert_eq!(p.level, OutbreakLevel::High);
        assert_eq!(severity_three_band(p.score), "high");
    }

    #[test]
    fn clean_water_scores_zero() {
        let p = aggregate(92.0, 40.0, 7.5);
        assert_eq!(p.score, 0.0);
        assert_eq!(p.level, OutbreakLevel::VeryLow);
    }

    #[test]
    fn middle_bands_add_up() {
        // WQI 45 → +25, fc 800 → +20, DO 4.5 → +10
        let p = aggregate(45.0, 800.0, 4.5);
        assert_eq!(p.score, 55.0);
        assert_eq!(p.level, OutbreakLevel::High);
    }

    #[test]
    fn score_never_exceeds_100() {
        let p = aggregate(0.0, 1.0e7, 0.0);
        assert!(p.score <= 100.0);
        let p = aggregate_with_horizon(0.0, 1.0e7, 0.0, 365.0);
        assert!(p.score <= 100.0);
    }

    #[test]
    fn seven_day_horizon_roughly_halves() {
        let month = aggregate_with_horizon(20.0, 3000.0, 3.0, 30.0);
        let week = aggregate_with_horizon(20.0, 3000.0, 3.0, 7.0);
        assert_eq!(month.score, 85.0);
        let ratio = week.score / month.score;
        assert!((ratio - 0.5).abs() < 0.05, "ratio was {ratio}");
    }

    #[test]
    fn non_positive_horizon_is_zero() {
        let p = aggregate_with_horizon(20.0, 3000.0, 3.0, 0.0);
        assert_eq!(p.score, 0.0);
        assert_eq!(p.level, OutbreakLevel::VeryLow);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(OutbreakLevel::from_score(4.9), OutbreakLevel::VeryLow);
        assert_eq!(OutbreakLevel::from_score(5.0), OutbreakLevel::Low);
        assert_eq!(OutbreakLevel::from_score(15.0), OutbreakLevel::Medium);
        assert_eq!(OutbreakLevel::from_score(40.0), OutbreakLevel::High);
        // Legacy labels agree on the shared cut-points
        assert_eq!(severity_three_band(4.9), "low");
        assert_eq!(severity_three_band(14.9), "medium");
        assert_eq!(severity_three_band(15.0), "high");
    }
}
