//! Population impact estimation
//!
//! Display-grade estimates of how many people a contamination event
//! could touch: a static district headcount lookup, a fixed affected
//! fraction, and outbreak-score-banded attack rates. Pure multiplicative
//! arithmetic with no error paths - an unknown district falls back to a
//! documented constant, never to zero or a panic.

use crate::constants::population::{
    AFFECTED_FRACTION, CASE_RATES, CASE_RATE_SCORE_BANDS, DISTRICT_POPULATION,
    FALLBACK_DISTRICT_POPULATION,
};

/// Look up a district's population
///
/// Case-insensitive on ASCII; districts missing from the table resolve
/// to [`FALLBACK_DISTRICT_POPULATION`].
pub fn district_population(district: &str) -> u64 {
    DISTRICT_POPULATION
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(district.trim()))
        .map(|(_, population)| *population)
        .unwrap_or(FALLBACK_DISTRICT_POPULATION)
}

/// Headcount drawing on the monitored source in a district
///
/// District population × the fixed affected fraction (15%).
pub fn estimate_affected(district: &str) -> u64 {
    let population = district_population(district) as f64;
    (population * AFFECTED_FRACTION) as u64
}

/// Expected case count for an affected headcount and outbreak score
///
/// Attack rate by score band: >70 → 5%, >50 → 2%, >30 → 1%,
/// else 0.2% background.
pub fn estimate_cases(headcount: u64, outbreak_score: f32) -> u64 {
    let rate = if outbreak_score > CASE_RATE_SCORE_BANDS[0] {
        CASE_RATES[0]
    } else if outbreak_score > CASE_RATE_SCORE_BANDS[1] {
        CASE_RATES[1]
    } else if outbreak_score > CASE_RATE_SCORE_BANDS[2] {
        CASE_RATES[2]
    } else {
        CASE_RATES[3]
    };

    (headcount as f64 * rate) as u64
}
